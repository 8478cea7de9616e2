/// Morphology directives attached to template slots.
///
/// The lexicalizer does not inflect anything itself. It wraps slot text in
/// a `morph(...)` call that the external realizer evaluates, e.g.
/// `{{'Sparta Praha'|morph('Case=Nom', ref=1)}}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MorphError {
    #[error("empty morphology directive")]
    Empty,
    #[error("unknown morphology parameter '{0}'")]
    UnknownParameter(String),
    #[error("invalid value '{value}' for morphology parameter '{key}'")]
    InvalidValue { key: String, value: String },
}

/// The seven Czech grammatical cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    Nom,
    Gen,
    Dat,
    Acc,
    Voc,
    Loc,
    Ins,
}

impl Case {
    /// Accepts the abbreviation (`acc`) or the traditional Czech case
    /// number (`4`).
    pub fn parse(value: &str) -> Option<Case> {
        let case = match value.to_ascii_lowercase().as_str() {
            "nom" | "1" => Self::Nom,
            "gen" | "2" => Self::Gen,
            "dat" | "3" => Self::Dat,
            "acc" | "4" => Self::Acc,
            "voc" | "5" => Self::Voc,
            "loc" | "6" => Self::Loc,
            "ins" | "7" => Self::Ins,
            _ => return None,
        };
        Some(case)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nom => "Nom",
            Self::Gen => "Gen",
            Self::Dat => "Dat",
            Self::Acc => "Acc",
            Self::Voc => "Voc",
            Self::Loc => "Loc",
            Self::Ins => "Ins",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Past,
    Pres,
    Fut,
}

impl Tense {
    pub fn parse(value: &str) -> Option<Tense> {
        let tense = match value.to_ascii_lowercase().as_str() {
            "past" => Self::Past,
            "pres" | "present" => Self::Pres,
            "fut" | "future" => Self::Fut,
            _ => return None,
        };
        Some(tense)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Past => "Past",
            Self::Pres => "Pres",
            Self::Fut => "Fut",
        }
    }
}

/// Case, tense and cross-reference indices for one slot.
///
/// `reference` marks a slot other slots can agree with; `agreement`
/// points at the reference a slot must agree with (e.g. a finite verb
/// agreeing with its subject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MorphParams {
    pub case: Option<Case>,
    pub tense: Option<Tense>,
    pub reference: Option<u32>,
    pub agreement: Option<u32>,
}

impl MorphParams {
    /// Parses a directive such as `case=nom,ref=1` or `tense=past,agr=1`.
    pub fn parse(directive: &str) -> Result<MorphParams, MorphError> {
        let mut params = MorphParams::default();
        let mut any = false;

        for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| MorphError::UnknownParameter(part.to_string()))?;
            let (key, value) = (key.trim(), value.trim());
            let invalid = || MorphError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "case" => params.case = Some(Case::parse(value).ok_or_else(invalid)?),
                "tense" => params.tense = Some(Tense::parse(value).ok_or_else(invalid)?),
                "ref" => params.reference = Some(value.parse().map_err(|_| invalid())?),
                "agr" => params.agreement = Some(value.parse().map_err(|_| invalid())?),
                other => return Err(MorphError::UnknownParameter(other.to_string())),
            }
            any = true;
        }

        if any {
            Ok(params)
        } else {
            Err(MorphError::Empty)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.case.is_none()
            && self.tense.is_none()
            && self.reference.is_none()
            && self.agreement.is_none()
    }

    /// Wraps `text` in the realizer's morph call. Text with no
    /// parameters is returned unchanged.
    pub fn apply(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }

        let mut args = Vec::with_capacity(4);
        if let Some(case) = self.case {
            args.push(format!("'Case={}'", case.label()));
        }
        if let Some(tense) = self.tense {
            args.push(format!("'Tense={}'", tense.label()));
        }
        if let Some(reference) = self.reference {
            args.push(format!("ref={}", reference));
        }
        if let Some(agreement) = self.agreement {
            args.push(format!("agr={}", agreement));
        }

        format!(
            "{{{{'{}'|morph({})}}}}",
            escape_quoted(text),
            args.join(", ")
        )
    }
}

fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_directive() {
        let p = MorphParams::parse("case=nom, tense=past, ref=1, agr=2").unwrap();
        assert_eq!(p.case, Some(Case::Nom));
        assert_eq!(p.tense, Some(Tense::Past));
        assert_eq!(p.reference, Some(1));
        assert_eq!(p.agreement, Some(2));
    }

    #[test]
    fn parse_case_numbers() {
        assert_eq!(MorphParams::parse("case=4").unwrap().case, Some(Case::Acc));
        assert_eq!(MorphParams::parse("case=7").unwrap().case, Some(Case::Ins));
        assert_eq!(MorphParams::parse("case=LOC").unwrap().case, Some(Case::Loc));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(MorphParams::parse(""), Err(MorphError::Empty));
        assert_eq!(MorphParams::parse(" , "), Err(MorphError::Empty));
        assert!(matches!(
            MorphParams::parse("case=8"),
            Err(MorphError::InvalidValue { .. })
        ));
        assert!(matches!(
            MorphParams::parse("mood=imp"),
            Err(MorphError::UnknownParameter(_))
        ));
        assert!(matches!(
            MorphParams::parse("ref=x"),
            Err(MorphError::InvalidValue { .. })
        ));
        assert!(matches!(
            MorphParams::parse("nom"),
            Err(MorphError::UnknownParameter(_))
        ));
    }

    #[test]
    fn apply_renders_present_fields_in_order() {
        let subject = MorphParams::parse("case=nom,ref=1").unwrap();
        assert_eq!(
            subject.apply("Sparta Praha"),
            "{{'Sparta Praha'|morph('Case=Nom', ref=1)}}"
        );

        let verb = MorphParams::parse("tense=past,agr=1").unwrap();
        assert_eq!(verb.apply("porazit"), "{{'porazit'|morph('Tense=Past', agr=1)}}");
    }

    #[test]
    fn apply_without_parameters_is_literal() {
        assert_eq!(MorphParams::default().apply("2:1"), "2:1");
    }

    #[test]
    fn apply_escapes_quotes() {
        let p = MorphParams::parse("case=acc").unwrap();
        assert_eq!(p.apply("O'Neil"), "{{'O\\'Neil'|morph('Case=Acc')}}");
    }
}
