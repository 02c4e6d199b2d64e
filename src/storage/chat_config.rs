//! Chat configuration storage
//!
//! A chat configuration is a reusable, named set of sampling parameters plus
//! the system prompt that opens a chat. Each one lives in its own JSON file
//! in the application data directory.

use crate::storage::StorageError;
use crate::validation::{self, first_error, rules, FieldError, RuleRef, ValidationError, ValidationRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of saved chat configurations
pub const CHAT_CONFIGURATION_EXTENSION: &str = "enchat";

pub const DEFAULT_SYSTEM_CONTENT: &str = "You are an AI assistant.";
pub const DEFAULT_TEMP: f64 = 0.8;
/// `-1` lets the model stop on its own
pub const DEFAULT_N_PREDICT: i64 = -1;
pub const DEFAULT_TOP_K: i64 = 40;
pub const DEFAULT_REPEAT_PENALTY: f64 = 1.1;
pub const DEFAULT_MIN_P: f64 = 0.05;
pub const DEFAULT_TOP_P: f64 = 0.95;

/// The fields of a chat configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatField {
    SystemContent,
    Temp,
    NPredict,
    TopK,
    RepeatPenalty,
    MinP,
    TopP,
}

impl ChatField {
    pub const ALL: [ChatField; 7] = [
        ChatField::SystemContent,
        ChatField::Temp,
        ChatField::NPredict,
        ChatField::TopK,
        ChatField::RepeatPenalty,
        ChatField::MinP,
        ChatField::TopP,
    ];

    /// Key of the field in the JSON file
    pub fn key(self) -> &'static str {
        match self {
            ChatField::SystemContent => "system_content",
            ChatField::Temp => "temp",
            ChatField::NPredict => "n_predict",
            ChatField::TopK => "top_k",
            ChatField::RepeatPenalty => "repeat_penalty",
            ChatField::MinP => "min_p",
            ChatField::TopP => "top_p",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChatField::SystemContent => "System content",
            ChatField::Temp => "Temperature",
            ChatField::NPredict => "n_predict",
            ChatField::TopK => "top_k",
            ChatField::RepeatPenalty => "Repeat penalty",
            ChatField::MinP => "min_p",
            ChatField::TopP => "top_p",
        }
    }

    /// Rules applied to the field's value. Free-text fields have none.
    pub fn rules(self) -> &'static [ValidationRule] {
        match self {
            ChatField::SystemContent => &[],
            ChatField::Temp => &rules::TEMP,
            ChatField::NPredict => &rules::N_PREDICT,
            ChatField::TopK => &rules::TOP_K,
            ChatField::RepeatPenalty => &rules::REPEAT_PENALTY,
            ChatField::MinP => &rules::MIN_P,
            ChatField::TopP => &rules::TOP_P,
        }
    }

    fn is_integer(self) -> bool {
        matches!(self, ChatField::NPredict | ChatField::TopK)
    }
}

fn check_float(field: ChatField, value: f64) -> Result<f64, FieldError> {
    match field.rules().iter().find(|rule| !rule.contains_f64(value)) {
        None => Ok(value),
        Some(rule) => Err(FieldError {
            field: field.key(),
            message: rule.error_message().to_string(),
        }),
    }
}

fn check_integer(field: ChatField, value: i64) -> Result<i64, FieldError> {
    match field.rules().iter().find(|rule| !rule.contains_i64(value)) {
        None => Ok(value),
        Some(rule) => Err(FieldError {
            field: field.key(),
            message: rule.error_message().to_string(),
        }),
    }
}

fn rejected(error: FieldError, value: impl ToString) -> ValidationError {
    ValidationError::Field {
        field: error.field,
        value: value.to_string(),
        message: error.message,
    }
}

/// Sampling parameters and system prompt for a chat
///
/// Every field is validated on the way in, so a value of this type always
/// holds a usable configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfiguration {
    system_content: String,
    temp: f64,
    n_predict: i64,
    top_k: i64,
    repeat_penalty: f64,
    min_p: f64,
    top_p: f64,
    /// Where this configuration was last read from or written to
    path: Option<PathBuf>,
}

impl Default for ChatConfiguration {
    fn default() -> Self {
        Self {
            system_content: DEFAULT_SYSTEM_CONTENT.to_string(),
            temp: DEFAULT_TEMP,
            n_predict: DEFAULT_N_PREDICT,
            top_k: DEFAULT_TOP_K,
            repeat_penalty: DEFAULT_REPEAT_PENALTY,
            min_p: DEFAULT_MIN_P,
            top_p: DEFAULT_TOP_P,
            path: None,
        }
    }
}

/// On-disk layout; every key is optional so older files still load
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ChatConfigurationFile {
    system_content: Option<String>,
    temp: Option<f64>,
    n_predict: Option<i64>,
    top_k: Option<i64>,
    repeat_penalty: Option<f64>,
    min_p: Option<f64>,
    top_p: Option<f64>,
}

impl From<&ChatConfiguration> for ChatConfigurationFile {
    fn from(config: &ChatConfiguration) -> Self {
        Self {
            system_content: Some(config.system_content.clone()),
            temp: Some(config.temp),
            n_predict: Some(config.n_predict),
            top_k: Some(config.top_k),
            repeat_penalty: Some(config.repeat_penalty),
            min_p: Some(config.min_p),
            top_p: Some(config.top_p),
        }
    }
}

impl From<ChatConfigurationFile> for ChatConfigurationBuilder {
    fn from(file: ChatConfigurationFile) -> Self {
        Self {
            system_content: file.system_content,
            temp: file.temp,
            n_predict: file.n_predict,
            top_k: file.top_k,
            repeat_penalty: file.repeat_penalty,
            min_p: file.min_p,
            top_p: file.top_p,
        }
    }
}

impl ChatConfiguration {
    pub fn builder() -> ChatConfigurationBuilder {
        ChatConfigurationBuilder::default()
    }

    /// Create a new configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let mut config = Self::default();
        config.read_from_file(Some(path.as_ref()))?;
        Ok(config)
    }

    pub fn system_content(&self) -> &str {
        &self.system_content
    }

    pub fn temp(&self) -> f64 {
        self.temp
    }

    pub fn n_predict(&self) -> i64 {
        self.n_predict
    }

    pub fn top_k(&self) -> i64 {
        self.top_k
    }

    pub fn repeat_penalty(&self) -> f64 {
        self.repeat_penalty
    }

    pub fn min_p(&self) -> f64 {
        self.min_p
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Name shown for this configuration, taken from its file name
    pub fn name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
    }

    pub fn set_system_content(&mut self, value: impl Into<String>) {
        self.system_content = value.into();
    }

    pub fn set_temp(&mut self, value: f64) -> Result<(), ValidationError> {
        self.temp = check_float(ChatField::Temp, value).map_err(|e| rejected(e, value))?;
        Ok(())
    }

    pub fn set_n_predict(&mut self, value: i64) -> Result<(), ValidationError> {
        self.n_predict = check_integer(ChatField::NPredict, value).map_err(|e| rejected(e, value))?;
        Ok(())
    }

    pub fn set_top_k(&mut self, value: i64) -> Result<(), ValidationError> {
        self.top_k = check_integer(ChatField::TopK, value).map_err(|e| rejected(e, value))?;
        Ok(())
    }

    pub fn set_repeat_penalty(&mut self, value: f64) -> Result<(), ValidationError> {
        self.repeat_penalty =
            check_float(ChatField::RepeatPenalty, value).map_err(|e| rejected(e, value))?;
        Ok(())
    }

    pub fn set_min_p(&mut self, value: f64) -> Result<(), ValidationError> {
        self.min_p = check_float(ChatField::MinP, value).map_err(|e| rejected(e, value))?;
        Ok(())
    }

    pub fn set_top_p(&mut self, value: f64) -> Result<(), ValidationError> {
        self.top_p = check_float(ChatField::TopP, value).map_err(|e| rejected(e, value))?;
        Ok(())
    }

    /// Resolve the path for a read or write; a supplied path is remembered
    fn resolve_path(&mut self, path: Option<&Path>) -> Result<PathBuf, StorageError> {
        if let Some(path) = path {
            self.path = Some(path.to_path_buf());
        }
        self.path.clone().ok_or(StorageError::NoPathSpecified)
    }

    /// Write all fields to `path`, or to the remembered path if `None`.
    ///
    /// Parent directories are created and an existing file is overwritten.
    pub fn write_to_file(&mut self, path: Option<&Path>) -> Result<(), StorageError> {
        let path = self.resolve_path(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&ChatConfigurationFile::from(&*self))?;
        fs::write(&path, json)?;

        tracing::debug!("Saved chat configuration to {}", path.display());
        Ok(())
    }

    /// Replace all fields with those stored at `path`, or at the remembered
    /// path if `None`.
    ///
    /// Missing keys take their default value. Stored values go through the
    /// same validation as the setters; on any error the fields are left as
    /// they were.
    pub fn read_from_file(&mut self, path: Option<&Path>) -> Result<(), StorageError> {
        let path = self.resolve_path(path)?;

        let json = fs::read_to_string(&path)?;
        let file: ChatConfigurationFile = serde_json::from_str(&json)?;
        let loaded = ChatConfigurationBuilder::from(file).build()?;

        *self = ChatConfiguration {
            path: Some(path.clone()),
            ..loaded
        };

        tracing::debug!("Loaded chat configuration from {}", path.display());
        Ok(())
    }
}

/// Location of the configuration called `name` inside `dir`
pub fn path_for_name(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, CHAT_CONFIGURATION_EXTENSION))
}

/// Chat configuration files in `dir`.
///
/// Paths are yielded lazily; a missing directory yields nothing.
pub fn available_filenames(dir: &Path) -> Result<impl Iterator<Item = PathBuf>, StorageError> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = PathBuf::from(escaped).join(format!("*.{}", CHAT_CONFIGURATION_EXTENSION));

    let paths = glob::glob(&pattern.to_string_lossy())?;
    Ok(paths.filter_map(|entry| match entry {
        Ok(path) if path.is_file() => Some(path),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Skipping unreadable chat configuration entry: {}", e);
            None
        }
    }))
}

/// Builds a [`ChatConfiguration`], validating every field at once.
///
/// Unset fields take their default value.
#[derive(Debug, Clone, Default)]
pub struct ChatConfigurationBuilder {
    system_content: Option<String>,
    temp: Option<f64>,
    n_predict: Option<i64>,
    top_k: Option<i64>,
    repeat_penalty: Option<f64>,
    min_p: Option<f64>,
    top_p: Option<f64>,
}

impl ChatConfigurationBuilder {
    pub fn system_content(mut self, value: impl Into<String>) -> Self {
        self.system_content = Some(value.into());
        self
    }

    pub fn temp(mut self, value: f64) -> Self {
        self.temp = Some(value);
        self
    }

    pub fn n_predict(mut self, value: i64) -> Self {
        self.n_predict = Some(value);
        self
    }

    pub fn top_k(mut self, value: i64) -> Self {
        self.top_k = Some(value);
        self
    }

    pub fn repeat_penalty(mut self, value: f64) -> Self {
        self.repeat_penalty = Some(value);
        self
    }

    pub fn min_p(mut self, value: f64) -> Self {
        self.min_p = Some(value);
        self
    }

    pub fn top_p(mut self, value: f64) -> Self {
        self.top_p = Some(value);
        self
    }

    /// Returns the configuration, or every field error found
    pub fn build(self) -> Result<ChatConfiguration, ValidationError> {
        let mut errors = Vec::new();
        let mut float = |field, value: Option<f64>, default| {
            check_float(field, value.unwrap_or(default)).unwrap_or_else(|e| {
                errors.push(e);
                default
            })
        };
        let temp = float(ChatField::Temp, self.temp, DEFAULT_TEMP);
        let repeat_penalty = float(ChatField::RepeatPenalty, self.repeat_penalty, DEFAULT_REPEAT_PENALTY);
        let min_p = float(ChatField::MinP, self.min_p, DEFAULT_MIN_P);
        let top_p = float(ChatField::TopP, self.top_p, DEFAULT_TOP_P);

        let mut integer = |field, value: Option<i64>, default| {
            check_integer(field, value.unwrap_or(default)).unwrap_or_else(|e| {
                errors.push(e);
                default
            })
        };
        let n_predict = integer(ChatField::NPredict, self.n_predict, DEFAULT_N_PREDICT);
        let top_k = integer(ChatField::TopK, self.top_k, DEFAULT_TOP_K);

        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors));
        }

        Ok(ChatConfiguration {
            system_content: self
                .system_content
                .unwrap_or_else(|| DEFAULT_SYSTEM_CONTENT.to_string()),
            temp,
            n_predict,
            top_k,
            repeat_penalty,
            min_p,
            top_p,
            path: None,
        })
    }
}

/// Raw text of each field as edited in the configuration panel
#[derive(Debug, Clone, PartialEq)]
pub struct ChatForm {
    pub system_content: String,
    pub temp: String,
    pub n_predict: String,
    pub top_k: String,
    pub repeat_penalty: String,
    pub min_p: String,
    pub top_p: String,
}

impl From<&ChatConfiguration> for ChatForm {
    fn from(config: &ChatConfiguration) -> Self {
        Self {
            system_content: config.system_content.clone(),
            temp: config.temp.to_string(),
            n_predict: config.n_predict.to_string(),
            top_k: config.top_k.to_string(),
            repeat_penalty: config.repeat_penalty.to_string(),
            min_p: config.min_p.to_string(),
            top_p: config.top_p.to_string(),
        }
    }
}

impl ChatForm {
    pub fn get(&self, field: ChatField) -> &str {
        match field {
            ChatField::SystemContent => &self.system_content,
            ChatField::Temp => &self.temp,
            ChatField::NPredict => &self.n_predict,
            ChatField::TopK => &self.top_k,
            ChatField::RepeatPenalty => &self.repeat_penalty,
            ChatField::MinP => &self.min_p,
            ChatField::TopP => &self.top_p,
        }
    }

    pub fn set(&mut self, field: ChatField, value: String) {
        let slot = match field {
            ChatField::SystemContent => &mut self.system_content,
            ChatField::Temp => &mut self.temp,
            ChatField::NPredict => &mut self.n_predict,
            ChatField::TopK => &mut self.top_k,
            ChatField::RepeatPenalty => &mut self.repeat_penalty,
            ChatField::MinP => &mut self.min_p,
            ChatField::TopP => &mut self.top_p,
        };
        *slot = value;
    }

    /// Message of the first rule the field's current text breaks
    pub fn error(&self, field: ChatField) -> Option<&'static str> {
        first_error(self.get(field), &[RuleRef::Many(field.rules())])
    }

    pub fn is_valid(&self) -> bool {
        ChatField::ALL
            .iter()
            .all(|&field| validation::validate_all(self.get(field), &[RuleRef::Many(field.rules())]))
    }

    /// Parse and validate every field, reporting all that fail
    pub fn build(&self) -> Result<ChatConfiguration, ValidationError> {
        let mut errors = Vec::new();
        let mut builder = ChatConfiguration::builder().system_content(self.system_content.clone());

        for field in ChatField::ALL {
            if field == ChatField::SystemContent {
                continue;
            }
            if let Some(message) = self.error(field) {
                errors.push(FieldError {
                    field: field.key(),
                    message: message.to_string(),
                });
                continue;
            }

            let text = self.get(field).trim();
            builder = if field.is_integer() {
                match text.parse::<i64>() {
                    Ok(v) if field == ChatField::NPredict => builder.n_predict(v),
                    Ok(v) => builder.top_k(v),
                    Err(e) => {
                        errors.push(FieldError {
                            field: field.key(),
                            message: e.to_string(),
                        });
                        builder
                    }
                }
            } else {
                match text.parse::<f64>() {
                    Ok(v) => match field {
                        ChatField::Temp => builder.temp(v),
                        ChatField::RepeatPenalty => builder.repeat_penalty(v),
                        ChatField::MinP => builder.min_p(v),
                        _ => builder.top_p(v),
                    },
                    Err(e) => {
                        errors.push(FieldError {
                            field: field.key(),
                            message: e.to_string(),
                        });
                        builder
                    }
                }
            };
        }

        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors));
        }
        builder.build()
    }

    /// Commit the form into `config`, keeping its remembered path
    pub fn apply_to(&self, config: &mut ChatConfiguration) -> Result<(), ValidationError> {
        let built = self.build()?;
        *config = ChatConfiguration {
            path: config.path.take(),
            ..built
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_configuration() {
        let config = ChatConfiguration::default();
        assert_eq!(config.system_content(), "You are an AI assistant.");
        assert_eq!(config.temp(), 0.8);
        assert_eq!(config.n_predict(), -1);
        assert_eq!(config.top_k(), 40);
        assert_eq!(config.repeat_penalty(), 1.1);
        assert_eq!(config.min_p(), 0.05);
        assert_eq!(config.top_p(), 0.95);
        assert!(config.path().is_none());
    }

    #[test]
    fn test_temp_boundaries() {
        let mut config = ChatConfiguration::default();
        assert!(config.set_temp(0.0).is_ok());
        assert!(config.set_temp(1.0).is_ok());

        assert!(config.set_temp(-0.0001).is_err());
        assert_eq!(config.temp(), 1.0);
        assert!(config.set_temp(1.0001).is_err());
        assert_eq!(config.temp(), 1.0);
        assert!(config.set_temp(f64::NAN).is_err());
    }

    #[test]
    fn test_n_predict_boundaries() {
        let mut config = ChatConfiguration::default();
        assert!(config.set_n_predict(-1).is_ok());
        assert!(config.set_n_predict(512).is_ok());

        let err = config.set_n_predict(-2).unwrap_err();
        assert!(matches!(err, ValidationError::Field { field: "n_predict", .. }));
        assert_eq!(config.n_predict(), 512);
    }

    #[test]
    fn test_other_setters() {
        let mut config = ChatConfiguration::default();
        assert!(config.set_top_k(0).is_ok());
        assert!(config.set_top_k(-1).is_err());
        assert!(config.set_repeat_penalty(0.0).is_ok());
        assert!(config.set_repeat_penalty(25.0).is_ok());
        assert!(config.set_repeat_penalty(-0.1).is_err());
        assert!(config.set_min_p(1.5).is_err());
        assert!(config.set_top_p(-0.5).is_err());
        assert_eq!(config.top_k(), 0);
        assert_eq!(config.repeat_penalty(), 25.0);
    }

    #[test]
    fn test_builder_collects_all_errors() {
        let err = ChatConfiguration::builder()
            .temp(3.0)
            .top_k(-5)
            .top_p(0.5)
            .build()
            .unwrap_err();

        match err {
            ValidationError::Fields(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["temp", "top_k"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = ChatConfiguration::builder().top_k(10).build().unwrap();
        assert_eq!(config.top_k(), 10);
        assert_eq!(config.temp(), DEFAULT_TEMP);
        assert_eq!(config.system_content(), DEFAULT_SYSTEM_CONTENT);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("creative.enchat");

        let mut config = ChatConfiguration::builder()
            .system_content("You are a pirate.")
            .temp(0.3)
            .n_predict(256)
            .top_k(20)
            .repeat_penalty(1.3)
            .min_p(0.1)
            .top_p(0.8)
            .build()
            .unwrap();
        config.write_to_file(Some(path.as_path())).unwrap();
        assert_eq!(config.path(), Some(path.as_path()));

        let loaded = ChatConfiguration::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.name().as_deref(), Some("creative"));
    }

    #[test]
    fn test_write_overwrites_using_remembered_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.enchat");

        let mut config = ChatConfiguration::default();
        config.write_to_file(Some(path.as_path())).unwrap();
        config.set_top_k(7).unwrap();
        config.write_to_file(None).unwrap();

        let mut reread = ChatConfiguration::default();
        reread.read_from_file(Some(path.as_path())).unwrap();
        assert_eq!(reread.top_k(), 7);
    }

    #[test]
    fn test_missing_path() {
        let mut config = ChatConfiguration::default();
        assert!(matches!(
            config.write_to_file(None),
            Err(StorageError::NoPathSpecified)
        ));
        assert!(matches!(
            config.read_from_file(None),
            Err(StorageError::NoPathSpecified)
        ));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("old.enchat");
        fs::write(&path, r#"{"temp": 0.2, "top_k": 12}"#).unwrap();

        let config = ChatConfiguration::load(&path).unwrap();
        assert_eq!(config.temp(), 0.2);
        assert_eq!(config.top_k(), 12);
        assert_eq!(config.system_content(), DEFAULT_SYSTEM_CONTENT);
        assert_eq!(config.n_predict(), DEFAULT_N_PREDICT);
        assert_eq!(config.repeat_penalty(), DEFAULT_REPEAT_PENALTY);
        assert_eq!(config.min_p(), DEFAULT_MIN_P);
        assert_eq!(config.top_p(), DEFAULT_TOP_P);
    }

    #[test]
    fn test_invalid_stored_value_leaves_record_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.enchat");
        fs::write(&path, r#"{"temp": 4.0}"#).unwrap();

        let mut config = ChatConfiguration::default();
        config.set_temp(0.5).unwrap();
        let err = config.read_from_file(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, StorageError::Invalid(ValidationError::Fields(_))));
        assert_eq!(config.temp(), 0.5);
    }

    #[test]
    fn test_malformed_json_propagates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.enchat");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            ChatConfiguration::load(&path),
            Err(StorageError::Json(_))
        ));
        assert!(matches!(
            ChatConfiguration::load(dir.path().join("absent.enchat")),
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn test_available_filenames() {
        let dir = tempdir().unwrap();
        for name in ["alpha", "beta"] {
            let mut config = ChatConfiguration::default();
            config
                .write_to_file(Some(path_for_name(dir.path(), name).as_path()))
                .unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut found: Vec<_> = available_filenames(dir.path())
            .unwrap()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        found.sort();
        assert_eq!(found, vec!["alpha.enchat", "beta.enchat"]);
    }

    #[test]
    fn test_available_filenames_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(available_filenames(&missing).unwrap().count(), 0);
    }

    #[test]
    fn test_form_round_trip() {
        let config = ChatConfiguration::default();
        let form = ChatForm::from(&config);
        assert_eq!(form.temp, "0.8");
        assert_eq!(form.n_predict, "-1");
        assert!(form.is_valid());
        assert_eq!(form.build().unwrap(), config);
    }

    #[test]
    fn test_form_reports_every_bad_field() {
        let mut form = ChatForm::from(&ChatConfiguration::default());
        form.set(ChatField::Temp, "hot".to_string());
        form.set(ChatField::TopK, "-3".to_string());
        form.set(ChatField::MinP, "0.5".to_string());

        assert_eq!(form.error(ChatField::Temp), Some("must be in the range [0,1]"));
        assert_eq!(form.error(ChatField::MinP), None);
        assert!(!form.is_valid());

        match form.build().unwrap_err() {
            ValidationError::Fields(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["temp", "top_k"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_form_apply_keeps_path() {
        let mut config = ChatConfiguration::default();
        let dir = tempdir().unwrap();
        let path = dir.path().join("keep.enchat");
        config.write_to_file(Some(path.as_path())).unwrap();

        let mut form = ChatForm::from(&config);
        form.set(ChatField::TopP, "0.5".to_string());
        form.apply_to(&mut config).unwrap();
        assert_eq!(config.top_p(), 0.5);
        assert_eq!(config.path(), Some(path.as_path()));
    }
}
