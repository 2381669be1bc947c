pub mod auth;
pub use auth::AuthService;
pub mod directory_service;
pub use directory_service::DirectoryService;
pub mod allocation_service;
pub use allocation_service::AllocationService;
pub mod rbac_service;
pub use rbac_service::RbacService;
pub mod advisor;
pub use advisor::AdvisorService;
