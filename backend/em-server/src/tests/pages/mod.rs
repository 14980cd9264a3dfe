mod event_detail;
mod home;
mod html;
