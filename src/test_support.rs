use crate::alias::AliasTable;
use crate::commands::{CommandContext, CommandOutput, CommandTable};
use crate::system::{BranchError, HostnameError, System, WorkingDirError};
use crate::template::{MAX_OUTPUT_LEN, lex};
use chrono::{DateTime, Local, TimeZone};

/// A [`System`] with fixed answers.
#[derive(Debug, Clone)]
pub(crate) struct FakeSystem {
    pub working_dir: Result<String, WorkingDirError>,
    pub hostname: Result<String, HostnameError>,
    pub branch: Result<Option<String>, BranchError>,
    pub superuser: bool,
    pub now: DateTime<Local>,
}

impl Default for FakeSystem {
    fn default() -> Self {
        Self {
            working_dir: Ok("/home/user/src/prwd".to_string()),
            hostname: Ok("box.example.org".to_string()),
            branch: Ok(None),
            superuser: false,
            now: Local.with_ymd_and_hms(2015, 3, 14, 9, 26, 53).unwrap(),
        }
    }
}

impl FakeSystem {
    pub(crate) fn with_cwd(cwd: &str) -> Self {
        Self {
            working_dir: Ok(cwd.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn with_branch(branch: &str) -> Self {
        Self {
            branch: Ok(Some(branch.to_string())),
            ..Self::default()
        }
    }
}

impl System for FakeSystem {
    fn working_dir(&self) -> Result<String, WorkingDirError> {
        self.working_dir.clone()
    }

    fn hostname(&self) -> Result<String, HostnameError> {
        self.hostname.clone()
    }

    fn branch(&self) -> Result<Option<String>, BranchError> {
        self.branch.clone()
    }

    fn is_superuser(&self) -> bool {
        self.superuser
    }

    fn now(&self) -> DateTime<Local> {
        self.now
    }
}

/// Alias table with `~` pointing at `/home/user`.
pub(crate) fn home_aliases() -> AliasTable {
    let mut aliases = AliasTable::new();
    aliases.add("~", "/home/user").unwrap();
    aliases
}

/// Run a single command line through the builtin table.
pub(crate) fn run_command(system: &FakeSystem, aliases: &AliasTable, line: &str) -> String {
    run_command_after(system, aliases, line, false)
}

/// Like [`run_command`], with the previous segment's emptiness given.
pub(crate) fn run_command_after(
    system: &FakeSystem,
    aliases: &AliasTable,
    line: &str,
    previous_empty: bool,
) -> String {
    let argv = lex(line).unwrap();
    let ctx = CommandContext {
        system,
        aliases,
        previous_empty,
    };
    let mut out = CommandOutput::with_capacity(MAX_OUTPUT_LEN);
    CommandTable::builtin()
        .dispatch(&argv, &ctx, &mut out)
        .unwrap();
    out.into_string()
}
