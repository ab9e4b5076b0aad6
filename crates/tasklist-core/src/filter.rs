use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum Filter {
  #[default]
  All,
  Active,
  Completed
}

impl Filter {
  pub const ALL: [Filter; 3] = [
    Filter::All,
    Filter::Active,
    Filter::Completed
  ];

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => !task.completed,
      | Self::Completed => task.completed
    }
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl FromStr for Filter {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s.trim() {
      | "all" => Ok(Self::All),
      | "active" => Ok(Self::Active),
      | "completed" => {
        Ok(Self::Completed)
      }
      | other => {
        Err(anyhow!(
          "unknown filter: {other}"
        ))
      }
    }
  }
}
