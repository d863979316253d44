pub mod dto;
pub mod wizard;

pub use dto::{DeclarationKind, DeclarationStatus, TaxDeclaration};
pub use wizard::{DeclarationWizard, WizardStep};

pub const ENTITY: &str = "a005_tax_declaration";
