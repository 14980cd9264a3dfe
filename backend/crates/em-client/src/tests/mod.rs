mod auth_subscription;
