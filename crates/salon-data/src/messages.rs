//! # Localized Messages
//!
//! User-displayable failure messages. These are the only error texts that
//! cross the repository boundary; the raw transport error is logged instead.
//!
//! ## Catalog Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  (locale, entity, action) ──► message                                  │
//! │                                                                         │
//! │  (Ko, Customer, Load)    ──► "고객 목록을 불러오는데 실패했습니다."      │
//! │  (Ko, Customer, Create)  ──► "고객 생성에 실패했습니다."                 │
//! │  (En, Appointment, Load) ──► "Failed to load appointments."            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use salon_core::ValidationError;

/// Display language for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean (default).
    #[default]
    Ko,
    /// English.
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ko => write!(f, "ko"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "ko-kr" | "korean" => Ok(Locale::Ko),
            "en" | "en-us" | "english" => Ok(Locale::En),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

/// Entity kinds the client manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Appointment,
    Staff,
    Service,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Customer => write!(f, "customer"),
            EntityKind::Appointment => write!(f, "appointment"),
            EntityKind::Staff => write!(f, "staff"),
            EntityKind::Service => write!(f, "service"),
        }
    }
}

/// Repository operations, as far as messages are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch a collection.
    Load,
    /// Fetch one entity.
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Load => write!(f, "load"),
            Action::Get => write!(f, "get"),
            Action::Create => write!(f, "create"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

fn noun_ko(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Customer => "고객",
        EntityKind::Appointment => "예약",
        EntityKind::Staff => "직원",
        EntityKind::Service => "서비스",
    }
}

fn noun_en(entity: EntityKind, plural: bool) -> &'static str {
    match (entity, plural) {
        (EntityKind::Customer, false) => "customer",
        (EntityKind::Customer, true) => "customers",
        (EntityKind::Appointment, false) => "appointment",
        (EntityKind::Appointment, true) => "appointments",
        (EntityKind::Staff, false) => "staff member",
        (EntityKind::Staff, true) => "staff",
        (EntityKind::Service, false) => "service",
        (EntityKind::Service, true) => "services",
    }
}

/// Returns the message shown when `action` on `entity` fails.
pub fn failure_message(locale: Locale, entity: EntityKind, action: Action) -> String {
    match locale {
        Locale::Ko => {
            let noun = noun_ko(entity);
            match action {
                Action::Load => format!("{} 목록을 불러오는데 실패했습니다.", noun),
                Action::Get => format!("{} 정보를 불러오는데 실패했습니다.", noun),
                Action::Create => format!("{} 생성에 실패했습니다.", noun),
                Action::Update => format!("{} 정보 수정에 실패했습니다.", noun),
                Action::Delete => format!("{} 삭제에 실패했습니다.", noun),
            }
        }
        Locale::En => match action {
            Action::Load => format!("Failed to load {}.", noun_en(entity, true)),
            Action::Get => format!("Failed to load {} details.", noun_en(entity, false)),
            Action::Create => format!("Failed to create {}.", noun_en(entity, false)),
            Action::Update => format!("Failed to update {}.", noun_en(entity, false)),
            Action::Delete => format!("Failed to delete {}.", noun_en(entity, false)),
        },
    }
}

/// Returns the message shown when the target entity no longer exists.
pub fn not_found_message(locale: Locale, entity: EntityKind) -> String {
    match locale {
        Locale::Ko => format!("{} 정보를 찾을 수 없습니다.", noun_ko(entity)),
        Locale::En => {
            let noun = noun_en(entity, false);
            let mut chars = noun.chars();
            let capitalized: String = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            format!("{} not found.", capitalized)
        }
    }
}

fn field_ko(field: &str) -> &str {
    match field {
        "name" => "이름",
        "phone" => "전화번호",
        "email" => "이메일",
        "memo" => "메모",
        "customerId" => "고객",
        "durationMinutes" => "소요 시간",
        "visitCount" => "방문 횟수",
        other => other,
    }
}

/// Returns the rule a rejected form broke, in the display language.
pub fn validation_message(locale: Locale, err: &ValidationError) -> String {
    if locale == Locale::En {
        return err.to_string();
    }

    match err {
        ValidationError::Required { field } => {
            format!("{}을(를) 입력해 주세요.", field_ko(field))
        }
        ValidationError::TooShort { field, min } => {
            format!("{}은(는) {}자 이상이어야 합니다.", field_ko(field), min)
        }
        ValidationError::TooLong { field, max } => {
            format!("{}은(는) {}자 이하여야 합니다.", field_ko(field), max)
        }
        ValidationError::OutOfRange { field, min, max } => {
            format!("{}은(는) {}에서 {} 사이여야 합니다.", field_ko(field), min, max)
        }
        ValidationError::InvalidFormat { field, .. } => {
            format!("{} 형식이 올바르지 않습니다.", field_ko(field))
        }
        ValidationError::EmptyUpdate => "변경할 내용이 없습니다.".to_string(),
    }
}
