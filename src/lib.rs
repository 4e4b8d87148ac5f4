//! Self-certification records (selfcert)
//!
//! Admin table over certification records (search, sort, paginate, select,
//! CSV export) plus the submission form that creates them.
//!
//! Pure core / impure shell: `state`, `form`, `export` and `parser` are
//! pure and take their collaborators as trait objects; `source`, `view`
//! and `logging` own the I/O.

pub mod config;
pub mod export;
pub mod form;
pub mod logging;
pub mod model;
pub mod notify;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
