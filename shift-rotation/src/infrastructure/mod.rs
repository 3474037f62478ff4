pub mod preference_repo;
