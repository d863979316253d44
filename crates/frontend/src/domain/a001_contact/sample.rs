use contracts::domain::a001_contact::{Contact, ContactKind, ContactStatus};

#[allow(clippy::too_many_arguments)]
fn contact(
    id: &str,
    name: &str,
    company: &str,
    email: &str,
    phone: &str,
    city: &str,
    kind: ContactKind,
    status: ContactStatus,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        city: city.to_string(),
        kind,
        status,
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<Contact> {
    use ContactKind::*;
    use ContactStatus::*;
    vec![
        contact("1", "Marie Dupont", "Boulangerie Dupont", "marie.dupont@dupont.fr", "01 42 11 22 33", "Paris", Client, Active),
        contact("2", "Jean Martin", "Martin Transports", "j.martin@martin-transports.fr", "04 78 55 66 77", "Lyon", Supplier, Active),
        contact("3", "Sophie Bernard", "Atelier Bernard", "sophie@atelier-bernard.fr", "05 56 12 34 56", "Bordeaux", Prospect, Active),
        contact("4", "Luc Petit", "Petit & Fils", "luc.petit@petitfils.fr", "03 88 90 12 34", "Strasbourg", Client, Inactive),
        contact("5", "Élodie Moreau", "Cabinet Moreau", "elodie.moreau@cabinet-moreau.fr", "02 40 45 67 89", "Nantes", Partner, Active),
        contact("6", "Thomas Laurent", "Garage Laurent", "contact@garage-laurent.fr", "04 91 23 45 67", "Marseille", Supplier, Active),
        contact("7", "Camille Roux", "Roux Conseil", "camille.roux@rouxconseil.fr", "05 61 78 90 12", "Toulouse", Prospect, Inactive),
    ]
}
