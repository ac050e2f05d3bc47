mod credentials;
mod observability;
