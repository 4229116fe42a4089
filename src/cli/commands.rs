pub mod calc;
pub mod compare;
pub mod delete;
pub mod initdb;
pub mod list;
pub mod save;
pub mod show;

pub use calc::calculate;
pub use compare::compare_scenarios;
pub use delete::delete_scenario;
pub use initdb::init_database;
pub use list::list_scenarios;
pub use save::save_scenario;
pub use show::show_scenario;
