pub mod a001_users;
pub mod a002_providers;
pub mod a003_bookings;
pub mod a004_documents;
pub mod a005_subscriptions;
pub mod a006_transactions;
pub mod a007_staff;
pub mod a008_blog_posts;
