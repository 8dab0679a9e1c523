//! Explanations printed by `--explain`.

use colored::Colorize;

/// Command explanation builder.
pub struct Explain {
    description: String,
    what_happens: Vec<String>,
    requirement: Option<String>,
    caveat: Option<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            what_happens: Vec::new(),
            requirement: None,
            caveat: None,
        }
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn requires(mut self, requirement: &str) -> Self {
        self.requirement = Some(requirement.to_string());
        self
    }

    fn caveat(mut self, caveat: &str) -> Self {
        self.caveat = Some(caveat.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", "=== What This Does ===".bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        if let Some(requirement) = &self.requirement {
            println!("{} {}", "Requires:".bold(), requirement);
        }

        if let Some(caveat) = &self.caveat {
            println!("{} {}", "Note:".bold(), caveat.dimmed());
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn accounts() -> Self {
        Self::new("Lists local user accounts and flags hidden or unexpected administrators.")
            .step("Enumerates accounts with `net user`")
            .step("Flags names ending in `$`, which `net user` normally hides")
            .step("Queries each account's group membership")
            .step("Flags Administrators members that are not built-in accounts")
            .requires("an elevated (Administrator) shell")
    }

    pub fn processes() -> Self {
        Self::new("Takes one snapshot of running processes and checks each against heuristics.")
            .step("Names that look like a trusted system binary (svch0st.exe)")
            .step("Keywords associated with offensive tooling in the name or path")
            .step("Executables under Temp, Downloads, Desktop, AppData\\Roaming or .cache")
            .step("System binary names running outside System32/SysWOW64")
            .step("Many copies of a process from a risky location or interpreter")
            .caveat("Protected processes report their path and owner as Unknown.")
    }

    pub fn startup() -> Self {
        Self::new("Lists auto-start entries and checks them for persistence indicators.")
            .step("Reads Run and RunOnce under HKCU and HKLM")
            .step("Lists executables in the user and common Startup folders")
            .step("Extracts the program path from each command line")
            .step("Flags risky or untrusted locations and offensive-tool keywords")
            .step("Flags names that mimic system components (svchost_1)")
            .requires("an elevated (Administrator) shell")
    }

    pub fn all() -> Self {
        Self::new("Runs the account, process and startup scans in sequence.")
            .step("Each scan reports independently")
            .step("A scan whose sources all fail is reported and the run exits non-zero")
            .requires("an elevated (Administrator) shell")
    }

    pub fn rules() -> Self {
        Self::new("Prints the rule tables in effect: built-in defaults merged with the config file.")
            .step("Edit the [rules.*] tables in config.toml to tune them")
            .step("`hostwatch config init` writes a file you can start from")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostwatch_core::rules::ProcessRules;

    #[test]
    fn process_locations_named_are_default_high_risk_paths() {
        let high_risk = ProcessRules::default().high_risk_paths;
        let step = Explain::processes()
            .what_happens
            .into_iter()
            .find(|s| s.starts_with("Executables under"))
            .unwrap();
        let listed = step
            .trim_start_matches("Executables under ")
            .split([',', ' '])
            .filter(|w| !w.is_empty() && *w != "or");

        for location in listed {
            assert!(
                high_risk.iter().any(|p| p.contains(location)),
                "{location} is not a default high-risk path"
            );
        }
    }
}
