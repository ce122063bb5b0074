pub mod case_visitor;
