use crate::assets::RegionTable;
use crate::model::Party;
use crate::sampler::Sampler;

/// Draws a participant. Roughly a third of the draws yield nobody, which the
/// caller filters out; the rest split evenly between people and companies.
pub fn party(sampler: &mut Sampler) -> Option<Party> {
    match sampler.int(0, 2) {
        0 => Some(person(sampler)),
        1 => Some(company(sampler)),
        _ => None,
    }
}

/// Draws a lawyer: always a natural person, always carrying a bar document
/// formed by a state abbreviation and a six-digit registration number.
pub fn lawyer(sampler: &mut Sampler, regions: &RegionTable) -> Party {
    let state = sampler.pick(regions.abbreviations()).clone();
    let registration = sampler.digits(6);
    Party {
        nome: sampler.full_name(),
        documento: Some(format!("{state}{registration}")),
    }
}

fn person(sampler: &mut Sampler) -> Party {
    let nome = sampler.full_name();
    let documento = match sampler.int(0, 2) {
        0 => Some(cpf(sampler)),
        1 => Some(rg(sampler)),
        _ => None,
    };
    Party { nome, documento }
}

fn company(sampler: &mut Sampler) -> Party {
    let nome = sampler.company_name();
    let documento = sampler.chance(50).then(|| cnpj(sampler));
    Party { nome, documento }
}

fn cpf(sampler: &mut Sampler) -> String {
    format!(
        "{:03}.{:03}.{:03}-{:02}",
        sampler.int(0, 999),
        sampler.int(0, 999),
        sampler.int(0, 999),
        sampler.int(0, 99)
    )
}

fn rg(sampler: &mut Sampler) -> String {
    format!(
        "{:02}.{:03}.{:03}-{}",
        sampler.int(0, 99),
        sampler.int(0, 999),
        sampler.int(0, 999),
        sampler.int(0, 9)
    )
}

fn cnpj(sampler: &mut Sampler) -> String {
    format!(
        "{:02}.{:03}.{:03}/{:04}-{:02}",
        sampler.int(0, 99),
        sampler.int(0, 999),
        sampler.int(0, 999),
        sampler.int(1, 9999),
        sampler.int(0, 99)
    )
}
