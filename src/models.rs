use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown python version `{0}` (expected one of 3.7, 3.8, 3.9, 3.10, 3.11)")]
    UnknownPythonVersion(String),
    #[error("unknown branch `{0}` (expected one of main, dev, feature)")]
    UnknownBranch(String),
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PythonVersion {
    #[serde(rename = "3.7")]
    V3_7,
    #[serde(rename = "3.8")]
    V3_8,
    #[serde(rename = "3.9")]
    V3_9,
    #[default]
    #[serde(rename = "3.10")]
    V3_10,
    #[serde(rename = "3.11")]
    V3_11,
}

impl PythonVersion {
    /// Options in the order the selector lists them.
    pub const ALL: [PythonVersion; 5] = [
        PythonVersion::V3_7,
        PythonVersion::V3_8,
        PythonVersion::V3_9,
        PythonVersion::V3_10,
        PythonVersion::V3_11,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PythonVersion::V3_7 => "3.7",
            PythonVersion::V3_8 => "3.8",
            PythonVersion::V3_9 => "3.9",
            PythonVersion::V3_10 => "3.10",
            PythonVersion::V3_11 => "3.11",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PythonVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPythonVersion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    #[default]
    Main,
    Dev,
    Feature,
}

impl Branch {
    pub const ALL: [Branch; 3] = [Branch::Main, Branch::Dev, Branch::Feature];

    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Main => "main",
            Branch::Dev => "dev",
            Branch::Feature => "feature",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ParseError::UnknownBranch(s.to_string()))
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarVisibility {
    #[default]
    Closed,
    Open,
}

impl SidebarVisibility {
    pub fn is_open(self) -> bool {
        self == SidebarVisibility::Open
    }
}

/// Navigation destinations shown in the nav bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Route {
    Overview,
    Refactor,
    Analyzer,
    DependencyManagement,
    ReadmeGeneration,
    GithubAction,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Overview,
        Route::Refactor,
        Route::Analyzer,
        Route::DependencyManagement,
        Route::ReadmeGeneration,
        Route::GithubAction,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Overview => "/overview",
            Route::Refactor => "/refactor",
            Route::Analyzer => "/analyzer",
            Route::DependencyManagement => "/dependency_management",
            Route::ReadmeGeneration => "/readme_generation",
            Route::GithubAction => "/github_action",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::Refactor => "Refactor",
            Route::Analyzer => "Analyze",
            Route::DependencyManagement => "Dependency",
            Route::ReadmeGeneration => "Readme",
            Route::GithubAction => "GitHub",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|r| &r.path()[1..] == wanted)
            .ok_or_else(|| ParseError::UnknownRoute(s.to_string()))
    }
}

impl TryFrom<String> for Route {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Settings owned by a mounted shell. Dropped with the shell, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutSettingsState {
    #[serde(rename = "sidebar_open", serialize_with = "serialize_visibility")]
    sidebar: SidebarVisibility,
    python_version: PythonVersion,
    github_repo: String,
    branch: Branch,
}

fn serialize_visibility<S: serde::Serializer>(v: &SidebarVisibility, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_bool(v.is_open())
}

impl LayoutSettingsState {
    pub fn sidebar(&self) -> SidebarVisibility {
        self.sidebar
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }

    pub fn python_version(&self) -> PythonVersion {
        self.python_version
    }

    pub fn github_repo(&self) -> &str {
        &self.github_repo
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    pub fn set_sidebar(&mut self, visibility: SidebarVisibility) {
        self.sidebar = visibility;
    }

    pub fn set_python_version(&mut self, version: PythonVersion) {
        self.python_version = version;
    }

    pub fn set_github_repo(&mut self, repo: impl Into<String>) {
        self.github_repo = repo.into();
    }

    pub fn set_branch(&mut self, branch: Branch) {
        self.branch = branch;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Close,
    PythonVersion,
    GithubRepo,
    Branch,
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [
        SettingsField::Close,
        SettingsField::PythonVersion,
        SettingsField::GithubRepo,
        SettingsField::Branch,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusArea {
    Nav,
    Sidebar(SettingsField),
}
