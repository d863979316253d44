pub mod details;
pub mod list;
pub mod wizard;

pub use details::TaxDeclarationDetail;
pub use list::TaxDeclarationList;
pub use wizard::DeclarationWizardPage;
