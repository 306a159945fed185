//! Record types for generated lawsuits and folders.
//!
//! Field names follow the fixture exchange schema consumed downstream, which
//! mixes English envelope keys with Portuguese domain keys. Every record is
//! built once by the factory and never mutated afterwards.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::GenerationError;

/// Placeholder carried by the header of cases under judicial secrecy.
pub const SECRECY_NOTICE: &str = "Dados apenas no tribunal";

/// Lifecycle status of an open lawsuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ativo,
    Arquivado,
    Suspenso,
}

/// A participant: natural person or organization. The document is omitted
/// from the serialized record entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documento: Option<String>,
}

/// Case header. Sealed cases expose only the secrecy notice.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Header {
    Sealed(SealedHeader),
    Open(OpenHeader),
}

#[derive(Debug, Clone, Serialize)]
pub struct SealedHeader {
    pub secret: String,
}

/// Descriptive metadata of an open case. Only the case class is mandatory;
/// absent optional fields are omitted, never serialized as null. `vara` and
/// `comarca` are mutually exclusive.
#[derive(Debug, Clone, Serialize)]
pub struct OpenHeader {
    pub numero_processo: String,
    pub instancia: u32,
    pub classe: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vara: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comarca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_processo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juiz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribuicao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_causa: Option<String>,
}

/// A docket movement entry.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub data_movimentacao: NaiveDate,
    pub movimentacao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_documento: Option<String>,
}

/// An official gazette publication about the case.
#[derive(Debug, Clone, Serialize)]
pub struct Publication {
    pub data_publicacao: NaiveDate,
    pub publicacao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_documento: Option<String>,
}

/// An attached document. The resource link is always present.
#[derive(Debug, Clone, Serialize)]
pub struct Appendix {
    pub data_documento: NaiveDate,
    pub descricao: String,
    pub url_documento: String,
}

/// A filed petition.
#[derive(Debug, Clone, Serialize)]
pub struct Petition {
    pub data_peticao: NaiveDate,
    pub tipo: String,
}

/// A scheduled hearing.
#[derive(Debug, Clone, Serialize)]
pub struct Hearing {
    pub data_audiencia: NaiveDate,
    pub audiencia: String,
    pub situacao: String,
    pub qtd_pessoas: u32,
}

/// A label applied to a span of one publication's text.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub evento_obj: Publication,
    pub tipo_evento: String,
    pub classificacao: String,
    pub ativo: bool,
    #[serde(rename = "match")]
    pub match_span: MatchSpan,
}

/// Character span into the classified event's text.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSpan {
    pub inicio: usize,
    pub fim: usize,
    pub termo: String,
}

/// One complete generated lawsuit.
///
/// When `is_secret` is set, the header carries only the secrecy notice and
/// every list below is empty.
#[derive(Debug, Clone, Serialize)]
pub struct Lawsuit {
    pub lawsuit_number: String,
    pub year: String,
    pub segment: String,
    pub region: String,
    pub origin: String,
    pub court_house: String,
    pub status: Option<Status>,
    pub instance: u32,
    pub is_secret: bool,
    pub header: Header,
    pub is_main: bool,
    pub is_appeal: bool,
    pub is_recourse: bool,
    pub is_attached: bool,
    pub is_dependent: bool,
    pub petition_list: Vec<Petition>,
    pub audition_list: Vec<Hearing>,
    pub progress_list: Vec<Progress>,
    pub appendix_list: Vec<Appendix>,
    pub publication_list: Vec<Publication>,
    pub part_active_list: Vec<Party>,
    pub part_active_lawyer_list: Vec<Party>,
    pub part_passive_list: Vec<Party>,
    pub part_passive_lawyer_list: Vec<Party>,
    pub part_other_list: Vec<Party>,
    pub classification_list: Vec<Classification>,
}

impl Lawsuit {
    /// Expands the record into a plain JSON tree.
    pub fn to_value(&self) -> Result<serde_json::Value, GenerationError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A folder holding one main lawsuit and its related proceedings. All four
/// related lists are empty when the main lawsuit is secret.
#[derive(Debug, Clone, Serialize)]
pub struct Folder {
    pub main_number: String,
    pub book_name: String,
    pub court_house: String,
    pub main: Lawsuit,
    pub appeals: Vec<Lawsuit>,
    pub recourses: Vec<Lawsuit>,
    pub attached: Vec<Lawsuit>,
    pub dependents: Vec<Lawsuit>,
}

impl Folder {
    /// Expands the folder, main case included, into a plain JSON tree.
    pub fn to_value(&self) -> Result<serde_json::Value, GenerationError> {
        Ok(serde_json::to_value(self)?)
    }
}
