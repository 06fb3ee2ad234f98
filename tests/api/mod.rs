mod health_tests;
mod posts_tests;
mod profile_tests;
