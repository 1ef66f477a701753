//! Formatação de datas e tempo relativo (pt-BR)
//!
//! - `format_date`: dd/mm/aaaa, opcionalmente com HH:MM, no fuso configurado
//! - `time_ago`: "há N unidades", com meses e anos de duração fixa (30 e 365 dias).
//!   É uma aproximação por subtração de relógio, não um cálculo de calendário.

use crate::error::{Error, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Unidades em ordem decrescente: (segundos, singular, plural)
const UNITS: [(i64, &str, &str); 6] = [
    (31_536_000, "ano", "anos"),
    (2_592_000, "mês", "meses"),
    (604_800, "semana", "semanas"),
    (86_400, "dia", "dias"),
    (3_600, "hora", "horas"),
    (60, "minuto", "minutos"),
];

const JUST_NOW: &str = "agora mesmo";

/// Converte a string de entrada em um instante UTC
///
/// # Arguments
/// * `input` - RFC 3339 (com offset) ou data/hora sem fuso
/// * `tz` - fuso usado para interpretar valores sem offset
pub fn parse_instant(input: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| Error::InvalidDate(input.to_string()))?;

    localize(naive, tz).ok_or_else(|| Error::InvalidDate(input.to_string()))
}

// Horário local inexistente (início de horário de verão) avança uma hora.
fn localize(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Formata uma data no padrão pt-BR
///
/// # Returns
/// "05/03/2024" ou, com `include_time`, "05/03/2024, 14:30"
pub fn format_date(input: &str, include_time: bool, tz: Tz) -> Result<String> {
    let local = parse_instant(input, tz)?.with_timezone(&tz);
    let fmt = if include_time { "%d/%m/%Y, %H:%M" } else { "%d/%m/%Y" };
    Ok(local.format(fmt).to_string())
}

/// Tempo relativo entre dois instantes
pub fn time_ago_between(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_milliseconds().div_euclid(1000);

    for (seconds, singular, plural) in UNITS {
        let count = elapsed / seconds;
        if count >= 1 {
            let unit = if count > 1 { plural } else { singular };
            return format!("há {} {}", count, unit);
        }
    }

    JUST_NOW.to_string()
}

/// Tempo relativo de `input` até `now`
pub fn time_ago(input: &str, now: DateTime<Utc>, tz: Tz) -> Result<String> {
    let then = parse_instant(input, tz)?;
    Ok(time_ago_between(then, now))
}
