pub mod use_instance;
