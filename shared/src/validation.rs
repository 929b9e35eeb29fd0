//! 表单校验模块
//!
//! 规则以 `validator` 派生宏声明在表单结构上，
//! 结果再折叠成 字段 -> 错误信息 的映射，与渲染层无关。
//! 每个字段只保留第一条错误，与表单逐项提示的方式一致。

use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::{LoginRequest, RegisterRequest};

pub const PASSWORD_MIN_LEN: usize = 8;
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;

/// 本地部分不能以 `.` 开头，也不能出现连续的 `.`
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z0-9_'+\-]+\.)*[a-z0-9_'+\-]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

static UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("uppercase pattern is valid"));
static LOWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]").expect("lowercase pattern is valid"));
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("digit pattern is valid"));

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// 对应的 input id，同时也是表单结构体中的字段名
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "confirm_password" => Some(Field::ConfirmPassword),
            _ => None,
        }
    }
}

/// 校验结果：字段 -> 错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录错误，已有错误的字段保持第一条
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// 长度错误排在最前，其余保持声明顺序
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        for (name, list) in source.field_errors() {
            let Some(field) = Field::from_id(&name) else {
                continue;
            };
            let mut list: Vec<&ValidationError> = list.iter().collect();
            list.sort_by_key(|e| e.code != "length");
            if let Some(first) = list.first() {
                errors.add(field, message_for(first));
            }
        }
        errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field.id(), msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// 规则未写 message 时，按长度参数拼出提示
fn message_for(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    let param = |key: &str| error.params.get(key).and_then(|v| v.as_u64());
    match &*error.code {
        "length" => {
            let len = error
                .params
                .get("value")
                .and_then(|v| v.as_str())
                .map(|v| v.chars().count() as u64)
                .unwrap_or(0);
            match (param("min"), param("max")) {
                (Some(min), _) if len < min => format!("Enter at least {min} characters."),
                (_, Some(max)) => format!("At most {max} characters."),
                _ => "Invalid length.".to_string(),
            }
        }
        code => format!("Invalid value ({code})."),
    }
}

fn password_strength(password: &str) -> Result<(), ValidationError> {
    let rules: [(&LazyLock<Regex>, &'static str, &'static str); 3] = [
        (&UPPER_RE, "uppercase", "Include at least 1 uppercase letter."),
        (&LOWER_RE, "lowercase", "Include at least 1 lowercase letter."),
        (&DIGIT_RE, "digit", "Include at least 1 number."),
    ];
    for (re, code, message) in rules {
        if !re.is_match(password) {
            return Err(ValidationError::new(code).with_message(Cow::Borrowed(message)));
        }
    }
    Ok(())
}

// =========================================================
// 表单模型
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(regex(path = *EMAIL_RE, message = "Enter a valid e-mail."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self).map_err(ValidationErrors::from)
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignupForm {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(regex(path = *EMAIL_RE, message = "Enter a valid e-mail."))]
    pub email: String,
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters."),
        custom(function = "password_strength")
    )]
    pub password: String,
    #[validate(
        length(min = 8, message = "Confirm your password."),
        must_match(other = "password", message = "Passwords do not match.")
    )]
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self).map_err(ValidationErrors::from)
    }

    /// 请求体不包含确认密码
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
