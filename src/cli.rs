use anyhow::Result;
use clap::{ArgAction, Parser};
use log::{debug, warn};

use crate::classes::{CharClass, ClassFlag, ClassFlags};
use crate::consts::{DEFAULT_COUNTER, DEFAULT_LENGTH, LESSPASS_MASTER_PASSWORD, VERSION};
use crate::master::{MasterPasswordSources, Prompt};
use crate::policy::{GenerationPolicy, PolicyBuilder};
use crate::prompt::Terminal;

const EXAMPLES: &str = "\
examples:
  # no symbols
  lesspass site login masterpassword -lud

  # only digits and length of 8
  lesspass site login masterpassword -d -L8

  # master password in env variable
  LESSPASS_MASTER_PASSWORD=\"masterpassword\" lesspass site login

copyright:
  Copyright © 2018 Guillaume Vincent <contact@lesspass.com>.  License GPLv3: GNU GPL version 3 <https://gnu.org/licenses/gpl.html>.
  This is free software: you are free to change and redistribute it.  There is NO WARRANTY, to the extent permitted by law";

#[derive(Debug, Parser)]
#[command(
    name = "lesspass",
    version = VERSION.as_str(),
    about = "Stateless password generator",
    override_usage = "lesspass SITE [LOGIN] [MASTER_PASSWORD] [OPTIONS]",
    after_help = EXAMPLES,
    disable_version_flag = true
)]
pub struct Args {
    /// Site used in the password generation (required)
    pub site: Option<String>,
    /// Login used in the password generation. Default to '' if not provided
    pub login: Option<String>,
    /// Master password used in password generation. Default to
    /// LESSPASS_MASTER_PASSWORD env variable or prompt
    pub master_password: Option<String>,

    /// Password length (default: 16, max: 35)
    #[arg(short = 'L', long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    pub length: i64,
    /// Password counter (default: 1)
    #[arg(short = 'C', long, default_value_t = DEFAULT_COUNTER, allow_negative_numbers = true)]
    pub counter: i64,
    /// Prompt for values interactively
    #[arg(short, long)]
    pub prompt: bool,
    /// Attempt to copy the password to the clipboard
    #[arg(short = 'c', long = "copy", visible_alias = "clipboard")]
    pub clipboard: bool,

    /// Add lowercase in password
    #[arg(short = 'l', long, conflicts_with = "no_lowercase")]
    pub lowercase: bool,
    /// Remove lowercase from password
    #[arg(long)]
    pub no_lowercase: bool,
    /// Add uppercase in password
    #[arg(short = 'u', long, conflicts_with = "no_uppercase")]
    pub uppercase: bool,
    /// Remove uppercase from password
    #[arg(long)]
    pub no_uppercase: bool,
    /// Add digits in password
    #[arg(short = 'd', long, conflicts_with = "no_digits")]
    pub digits: bool,
    /// Remove digits from password
    #[arg(long)]
    pub no_digits: bool,
    /// Add symbols in password
    #[arg(short = 's', long, conflicts_with = "no_symbols")]
    pub symbols: bool,
    /// Remove symbols from password
    #[arg(long)]
    pub no_symbols: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),
}

/// A resolved run: the policy to derive from, plus what to do with the result.
#[derive(Debug)]
pub struct Invocation {
    pub policy: GenerationPolicy,
    pub copy: bool,
}

impl Args {
    pub fn class_flags(&self) -> crate::Result<ClassFlags> {
        let mut flags = ClassFlags::default();
        let pairs = [
            (CharClass::Lowercase, self.lowercase, self.no_lowercase),
            (CharClass::Uppercase, self.uppercase, self.no_uppercase),
            (CharClass::Digits, self.digits, self.no_digits),
            (CharClass::Symbols, self.symbols, self.no_symbols),
        ];

        for &(class, enable, disable) in &pairs {
            flags.set(class, ClassFlag::from_pair(class, enable, disable)?);
        }

        Ok(flags)
    }

    /// Turns the parsed arguments into a policy. `environment` is the master
    /// password environment snapshot; `prompter` is only used with `--prompt`.
    pub fn resolve<P: Prompt>(
        self,
        environment: Option<&str>,
        mut prompter: P,
    ) -> crate::Result<Invocation> {
        let classes = self.class_flags()?;

        let mut site = self.site;
        let mut login = self.login;
        if self.prompt {
            if site.as_deref().map_or(true, str::is_empty) {
                debug!("prompting for site");
                site = Some(prompter.line("Site: ")?);
            }
            if login.is_none() {
                debug!("prompting for login");
                login = Some(prompter.line("Login: ")?);
            }
        }

        let sources = MasterPasswordSources {
            positional: self.master_password,
            environment,
            prompt: self.prompt,
        };

        let policy = PolicyBuilder::new()
            .site(site)
            .login(login.unwrap_or_default())
            .length(self.length)
            .counter(self.counter)
            .classes(classes)
            .build(|| sources.resolve(&mut prompter))?;

        Ok(Invocation {
            policy,
            copy: self.clipboard,
        })
    }
}

pub fn opt() -> Result<()> {
    let args = Args::parse();
    let invocation = args.resolve(LESSPASS_MASTER_PASSWORD.as_deref(), Terminal::new())?;

    // derivation happens outside this crate; hand off the resolved policy
    println!("{}", invocation.policy);

    if invocation.copy {
        warn!("clipboard copy is not handled by this build");
    }

    Ok(())
}
