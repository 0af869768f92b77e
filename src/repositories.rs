pub mod admin_repo;
