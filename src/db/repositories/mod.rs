//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod competition_repo;
pub mod income_repo;
pub mod member_repo;

pub use competition_repo::CompetitionRepository;
pub use income_repo::IncomeRepository;
pub use member_repo::MemberRepository;
