pub mod check_service_trait;
