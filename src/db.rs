pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod project_repo;
pub use project_repo::ProjectRepository;
pub mod department_repo;
pub use department_repo::DepartmentRepository;
pub mod effort_repo;
pub use effort_repo::EffortRepository;
pub mod assignment_repo;
pub use assignment_repo::AssignmentRepository;
pub mod role_repo;
pub use role_repo::RoleRepository;
pub mod query_repo;
pub use query_repo::QueryRepository;
