//! Status enums, entity types, and actions for Plenário.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer. Enums whose values appear in
//! generated Portuguese text additionally provide `label()` with the accented
//! display form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SessionKind
// ---------------------------------------------------------------------------

/// Kind of a legislative session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Ordinaria,
    Extraordinaria,
    Solene,
}

impl SessionKind {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordinaria => "ordinaria",
            Self::Extraordinaria => "extraordinaria",
            Self::Solene => "solene",
        }
    }

    /// Accented display form used in generated titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ordinaria => "Ordinária",
            Self::Extraordinaria => "Extraordinária",
            Self::Solene => "Solene",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Status of a legislative session through its lifecycle.
///
/// ```text
/// agendada → em_andamento → realizada
///                         → suspensa → em_andamento
///          → adiada → agendada
///          → cancelada
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Agendada,
    EmAndamento,
    Realizada,
    Adiada,
    Cancelada,
    Suspensa,
}

impl SessionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Agendada => &[Self::EmAndamento, Self::Adiada, Self::Cancelada],
            Self::EmAndamento => &[Self::Realizada, Self::Suspensa],
            Self::Suspensa => &[Self::EmAndamento],
            Self::Adiada => &[Self::Agendada],
            Self::Realizada | Self::Cancelada => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agendada => "agendada",
            Self::EmAndamento => "em_andamento",
            Self::Realizada => "realizada",
            Self::Adiada => "adiada",
            Self::Cancelada => "cancelada",
            Self::Suspensa => "suspensa",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// Kind of a legislative document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Mocao,
    ProjetoDeLei,
    Oficio,
    Requerimento,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mocao => "mocao",
            Self::ProjetoDeLei => "projeto_de_lei",
            Self::Oficio => "oficio",
            Self::Requerimento => "requerimento",
        }
    }

    /// Accented display form used in protocol references ("Moção nº 12/2025").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mocao => "Moção",
            Self::ProjetoDeLei => "Projeto de Lei",
            Self::Oficio => "Ofício",
            Self::Requerimento => "Requerimento",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocumentStatus
// ---------------------------------------------------------------------------

/// Status of a legislative document through tramitação.
///
/// ```text
/// protocolado → em_tramitacao → aprovado
///                             → rejeitado
///                             → arquivado
///             → arquivado
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Protocolado,
    EmTramitacao,
    Aprovado,
    Rejeitado,
    Arquivado,
}

impl DocumentStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Protocolado => &[Self::EmTramitacao, Self::Arquivado],
            Self::EmTramitacao => &[Self::Aprovado, Self::Rejeitado, Self::Arquivado],
            Self::Aprovado | Self::Rejeitado | Self::Arquivado => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protocolado => "protocolado",
            Self::EmTramitacao => "em_tramitacao",
            Self::Aprovado => "aprovado",
            Self::Rejeitado => "rejeitado",
            Self::Arquivado => "arquivado",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AgendaItemStatus
// ---------------------------------------------------------------------------

/// Status of an agenda (pauta) item. One-way: pending items get concluded
/// during the session; concluded items never reopen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgendaItemStatus {
    Pendente,
    Concluido,
}

impl AgendaItemStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pendente => &[Self::Concluido],
            Self::Concluido => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Concluido => "concluido",
        }
    }
}

impl fmt::Display for AgendaItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MinutesStatus
// ---------------------------------------------------------------------------

/// Status of session minutes (ata). Drafts are editable; approval is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MinutesStatus {
    Rascunho,
    Aprovada,
}

impl MinutesStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Rascunho => &[Self::Aprovada],
            Self::Aprovada => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rascunho => "rascunho",
            Self::Aprovada => "aprovada",
        }
    }
}

impl fmt::Display for MinutesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OpinionStatus / OpinionVerdict
// ---------------------------------------------------------------------------

/// Status of a committee opinion (parecer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpinionStatus {
    Pendente,
    Concluido,
}

impl OpinionStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pendente => &[Self::Concluido],
            Self::Concluido => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Concluido => "concluido",
        }
    }
}

impl fmt::Display for OpinionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict recorded when an opinion is concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpinionVerdict {
    Favoravel,
    Contrario,
}

impl OpinionVerdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favoravel => "favoravel",
            Self::Contrario => "contrario",
        }
    }
}

impl fmt::Display for OpinionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommitteeKind
// ---------------------------------------------------------------------------

/// Kind of a committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommitteeKind {
    Permanente,
    Temporaria,
}

impl CommitteeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permanente => "permanente",
            Self::Temporaria => "temporaria",
        }
    }
}

impl fmt::Display for CommitteeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BoardRole
// ---------------------------------------------------------------------------

/// The six fixed named seats of the directing board (mesa diretora).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoardRole {
    Presidente,
    VicePresidente,
    PrimeiroSecretario,
    SegundoSecretario,
    TerceiroSecretario,
    QuartoSecretario,
}

impl BoardRole {
    /// All six seats, in protocol order.
    pub const ALL: [Self; 6] = [
        Self::Presidente,
        Self::VicePresidente,
        Self::PrimeiroSecretario,
        Self::SegundoSecretario,
        Self::TerceiroSecretario,
        Self::QuartoSecretario,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presidente => "presidente",
            Self::VicePresidente => "vice_presidente",
            Self::PrimeiroSecretario => "primeiro_secretario",
            Self::SegundoSecretario => "segundo_secretario",
            Self::TerceiroSecretario => "terceiro_secretario",
            Self::QuartoSecretario => "quarto_secretario",
        }
    }
}

impl fmt::Display for BoardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserStatus
// ---------------------------------------------------------------------------

/// Status of a portal user account.
///
/// ```text
/// invited → active → deactivated
///         → deactivated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Invited,
    Active,
    Deactivated,
}

impl UserStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Invited => &[Self::Active, Self::Deactivated],
            Self::Active => &[Self::Deactivated],
            Self::Deactivated => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invited => "invited",
            Self::Active => "active",
            Self::Deactivated => "deactivated",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Type of action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
    StatusChanged,
    SeatAssigned,
    SeatCleared,
    Reordered,
    Invited,
    Activated,
    Deactivated,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::StatusChanged => "status_changed",
            Self::SeatAssigned => "seat_assigned",
            Self::SeatCleared => "seat_cleared",
            Self::Reordered => "reordered",
            Self::Invited => "invited",
            Self::Activated => "activated",
            Self::Deactivated => "deactivated",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Type of entity in the system, used in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Agent,
    Councilor,
    Committee,
    Board,
    Session,
    AgendaItem,
    Minutes,
    Document,
    Opinion,
    User,
    Audit,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Councilor => "councilor",
            Self::Committee => "committee",
            Self::Board => "board",
            Self::Session => "session",
            Self::AgendaItem => "agenda_item",
            Self::Minutes => "minutes",
            Self::Document => "document",
            Self::Opinion => "opinion",
            Self::User => "user",
            Self::Audit => "audit",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        session_kind_extraordinaria,
        SessionKind,
        SessionKind::Extraordinaria,
        "extraordinaria"
    );
    test_serde_roundtrip!(
        session_em_andamento,
        SessionStatus,
        SessionStatus::EmAndamento,
        "em_andamento"
    );
    test_serde_roundtrip!(
        session_agendada,
        SessionStatus,
        SessionStatus::Agendada,
        "agendada"
    );

    test_serde_roundtrip!(
        document_kind_projeto,
        DocumentKind,
        DocumentKind::ProjetoDeLei,
        "projeto_de_lei"
    );
    test_serde_roundtrip!(
        document_em_tramitacao,
        DocumentStatus,
        DocumentStatus::EmTramitacao,
        "em_tramitacao"
    );

    test_serde_roundtrip!(
        agenda_pendente,
        AgendaItemStatus,
        AgendaItemStatus::Pendente,
        "pendente"
    );
    test_serde_roundtrip!(
        minutes_rascunho,
        MinutesStatus,
        MinutesStatus::Rascunho,
        "rascunho"
    );
    test_serde_roundtrip!(
        opinion_concluido,
        OpinionStatus,
        OpinionStatus::Concluido,
        "concluido"
    );
    test_serde_roundtrip!(
        verdict_favoravel,
        OpinionVerdict,
        OpinionVerdict::Favoravel,
        "favoravel"
    );

    test_serde_roundtrip!(
        committee_permanente,
        CommitteeKind,
        CommitteeKind::Permanente,
        "permanente"
    );
    test_serde_roundtrip!(
        board_primeiro_secretario,
        BoardRole,
        BoardRole::PrimeiroSecretario,
        "primeiro_secretario"
    );

    test_serde_roundtrip!(user_invited, UserStatus, UserStatus::Invited, "invited");

    test_serde_roundtrip!(
        audit_seat_assigned,
        AuditAction,
        AuditAction::SeatAssigned,
        "seat_assigned"
    );
    test_serde_roundtrip!(
        entity_type_agenda_item,
        EntityType,
        EntityType::AgendaItem,
        "agenda_item"
    );

    // --- Transition tests ---

    #[test]
    fn session_valid_transitions() {
        assert!(SessionStatus::Agendada.can_transition_to(SessionStatus::EmAndamento));
        assert!(SessionStatus::Agendada.can_transition_to(SessionStatus::Adiada));
        assert!(SessionStatus::Agendada.can_transition_to(SessionStatus::Cancelada));
        assert!(SessionStatus::EmAndamento.can_transition_to(SessionStatus::Realizada));
        assert!(SessionStatus::EmAndamento.can_transition_to(SessionStatus::Suspensa));
        assert!(SessionStatus::Suspensa.can_transition_to(SessionStatus::EmAndamento));
        assert!(SessionStatus::Adiada.can_transition_to(SessionStatus::Agendada));
    }

    #[test]
    fn session_invalid_transitions() {
        assert!(!SessionStatus::Agendada.can_transition_to(SessionStatus::Realizada));
        assert!(!SessionStatus::Realizada.can_transition_to(SessionStatus::EmAndamento));
        assert!(!SessionStatus::Cancelada.can_transition_to(SessionStatus::Agendada));
        assert!(!SessionStatus::Suspensa.can_transition_to(SessionStatus::Realizada));
    }

    #[test]
    fn session_terminal_states() {
        assert!(SessionStatus::Realizada.allowed_next_states().is_empty());
        assert!(SessionStatus::Cancelada.allowed_next_states().is_empty());
    }

    #[test]
    fn document_valid_transitions() {
        assert!(DocumentStatus::Protocolado.can_transition_to(DocumentStatus::EmTramitacao));
        assert!(DocumentStatus::Protocolado.can_transition_to(DocumentStatus::Arquivado));
        assert!(DocumentStatus::EmTramitacao.can_transition_to(DocumentStatus::Aprovado));
        assert!(DocumentStatus::EmTramitacao.can_transition_to(DocumentStatus::Rejeitado));
        assert!(DocumentStatus::EmTramitacao.can_transition_to(DocumentStatus::Arquivado));
    }

    #[test]
    fn document_invalid_transitions() {
        assert!(!DocumentStatus::Protocolado.can_transition_to(DocumentStatus::Aprovado));
        assert!(!DocumentStatus::Aprovado.can_transition_to(DocumentStatus::EmTramitacao));
        assert!(!DocumentStatus::Arquivado.can_transition_to(DocumentStatus::Protocolado));
    }

    #[test]
    fn agenda_item_one_way() {
        assert!(AgendaItemStatus::Pendente.can_transition_to(AgendaItemStatus::Concluido));
        assert!(!AgendaItemStatus::Concluido.can_transition_to(AgendaItemStatus::Pendente));
    }

    #[test]
    fn minutes_one_way() {
        assert!(MinutesStatus::Rascunho.can_transition_to(MinutesStatus::Aprovada));
        assert!(!MinutesStatus::Aprovada.can_transition_to(MinutesStatus::Rascunho));
    }

    #[test]
    fn opinion_one_way() {
        assert!(OpinionStatus::Pendente.can_transition_to(OpinionStatus::Concluido));
        assert!(!OpinionStatus::Concluido.can_transition_to(OpinionStatus::Pendente));
    }

    #[test]
    fn user_valid_transitions() {
        assert!(UserStatus::Invited.can_transition_to(UserStatus::Active));
        assert!(UserStatus::Invited.can_transition_to(UserStatus::Deactivated));
        assert!(UserStatus::Active.can_transition_to(UserStatus::Deactivated));
    }

    #[test]
    fn user_invalid_transitions() {
        assert!(!UserStatus::Active.can_transition_to(UserStatus::Invited));
        assert!(!UserStatus::Deactivated.can_transition_to(UserStatus::Active));
    }

    #[test]
    fn board_roles_are_six() {
        assert_eq!(BoardRole::ALL.len(), 6);
    }

    // --- Display / as_str / label tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", SessionKind::Solene), "solene");
        assert_eq!(format!("{}", SessionStatus::EmAndamento), "em_andamento");
        assert_eq!(format!("{}", DocumentKind::ProjetoDeLei), "projeto_de_lei");
        assert_eq!(format!("{}", DocumentStatus::EmTramitacao), "em_tramitacao");
        assert_eq!(format!("{}", AgendaItemStatus::Concluido), "concluido");
        assert_eq!(format!("{}", MinutesStatus::Aprovada), "aprovada");
        assert_eq!(format!("{}", OpinionVerdict::Contrario), "contrario");
        assert_eq!(format!("{}", CommitteeKind::Temporaria), "temporaria");
        assert_eq!(format!("{}", BoardRole::QuartoSecretario), "quarto_secretario");
        assert_eq!(format!("{}", UserStatus::Deactivated), "deactivated");
        assert_eq!(format!("{}", AuditAction::StatusChanged), "status_changed");
        assert_eq!(format!("{}", EntityType::AgendaItem), "agenda_item");
    }

    #[test]
    fn labels_carry_accents() {
        assert_eq!(SessionKind::Ordinaria.label(), "Ordinária");
        assert_eq!(SessionKind::Extraordinaria.label(), "Extraordinária");
        assert_eq!(DocumentKind::Mocao.label(), "Moção");
        assert_eq!(DocumentKind::Oficio.label(), "Ofício");
    }
}
