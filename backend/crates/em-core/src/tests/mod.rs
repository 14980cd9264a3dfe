mod models;
mod navbar_view;
mod wire;
