//! Template data envelope

use serde::Serialize;

use crate::shared::{FieldErrors, LoginUser, NewSnippet, SignupUser, Snippet};

/// Everything a page template can see
///
/// `csrf_token`, `flash`, `logged_in` and `path` are filled in by the
/// renderer; handlers only set the page payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HtmlData {
    pub csrf_token: String,
    pub flash: Option<String>,
    pub logged_in: bool,
    pub path: String,
    pub form: Option<FormView>,
    pub snippet: Option<Snippet>,
    pub snippets: Vec<Snippet>,
}

impl HtmlData {
    /// Page showing a single snippet
    pub fn with_snippet(snippet: Snippet) -> Self {
        Self {
            snippet: Some(snippet),
            ..Self::default()
        }
    }

    /// Page listing snippets
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets,
            ..Self::default()
        }
    }

    /// Page showing a form, with the values to pre-fill and any failures
    pub fn with_form(values: impl Into<FormValues>, failures: FieldErrors) -> Self {
        Self {
            form: Some(FormView {
                values: values.into(),
                failures,
            }),
            ..Self::default()
        }
    }
}

/// A form as the template sees it
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub values: FormValues,
    pub failures: FieldErrors,
}

/// Submitted values, serialized as a flat object
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FormValues {
    Snippet(NewSnippet),
    Signup(SignupUser),
    Login(LoginUser),
}

impl From<NewSnippet> for FormValues {
    fn from(form: NewSnippet) -> Self {
        Self::Snippet(form)
    }
}

impl From<SignupUser> for FormValues {
    fn from(form: SignupUser) -> Self {
        Self::Signup(form)
    }
}

impl From<LoginUser> for FormValues {
    fn from(form: LoginUser) -> Self {
        Self::Login(form)
    }
}
