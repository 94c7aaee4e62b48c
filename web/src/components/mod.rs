pub mod nav;
pub mod record_table;
pub mod summary_card;
pub mod toaster;
