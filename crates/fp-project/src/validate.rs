//! Configuration validation logic.

use std::collections::HashSet;

use crate::schema::Config;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_config(config: &Config) -> Result<(), ValidationError> {
    if config.loggers.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "loggers".to_string(),
            value: "[]".to_string(),
            reason: "at least one logger is required".to_string(),
        });
    }

    let mut logger_ids = HashSet::new();
    for logger in &config.loggers {
        if !logger_ids.insert(&logger.logger_id) {
            return Err(ValidationError::DuplicateId {
                id: logger.logger_id.clone(),
                context: "loggers".to_string(),
            });
        }
    }

    if config.sampling.samples_per_cadence == 0 {
        return Err(ValidationError::InvalidValue {
            field: "sampling.samples_per_cadence".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    if config.sampling.measurement_step_min <= 0 {
        return Err(ValidationError::InvalidValue {
            field: "sampling.measurement_step_min".to_string(),
            value: config.sampling.measurement_step_min.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if config.sampling.start_time_min < 0 {
        return Err(ValidationError::InvalidValue {
            field: "sampling.start_time_min".to_string(),
            value: config.sampling.start_time_min.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    if config.window.start_hr < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "window.start_hr".to_string(),
            value: config.window.start_hr.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    if config.window.start_hr > config.window.end_hr {
        return Err(ValidationError::InvalidValue {
            field: "window".to_string(),
            value: format!("{}..{}", config.window.start_hr, config.window.end_hr),
            reason: "start is after end".to_string(),
        });
    }

    Ok(())
}
