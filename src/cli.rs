#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    /// Overrides `SHARIAWATCH_USER_ID`
    pub user: Option<String>,
    /// Overrides `SHARIAWATCH_PLAN`
    pub plan: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: i32,
    pub message: String,
}

#[must_use]
pub fn help_text(bin_name: &str) -> String {
    format!(
        "ShariaStocks watchlist\n\nUsage:\n  {bin_name} [options]\n\nOptions:\n  -h, --help          Show this help\n  -V, --version       Show version\n      --user <id>     Watchlist owner (overrides SHARIAWATCH_USER_ID)\n      --plan <tier>   Plan tier: free, basic or premium (overrides SHARIAWATCH_PLAN)\n"
    )
}

#[must_use]
pub fn version_text() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub fn parse_args<I, S>(args: I) -> Result<Command, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args::default();
    let mut show_help = false;
    let mut show_version = false;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => show_help = true,
            "-V" | "--version" => show_version = true,
            "--user" => parsed.user = Some(value_for(&arg, args.next())?),
            "--plan" => parsed.plan = Some(value_for(&arg, args.next())?),
            _ if arg.starts_with("--user=") => {
                parsed.user = Some(value_for("--user", Some(arg["--user=".len()..].to_string()))?);
            }
            _ if arg.starts_with("--plan=") => {
                parsed.plan = Some(value_for("--plan", Some(arg["--plan=".len()..].to_string()))?);
            }
            _ if arg.starts_with('-') => {
                return Err(ParseError {
                    code: 2,
                    message: format!("unknown option: {arg}\n\n{}", help_text("shariawatch")),
                });
            }
            _ => {
                return Err(ParseError {
                    code: 2,
                    message: format!(
                        "unexpected argument: {arg}\n\n{}",
                        help_text("shariawatch")
                    ),
                });
            }
        }
    }

    if show_help {
        return Ok(Command::Help);
    }

    if show_version {
        return Ok(Command::Version);
    }

    Ok(Command::Run(parsed))
}

fn value_for(option: &str, value: Option<String>) -> Result<String, ParseError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() && !v.starts_with('-') => Ok(v),
        _ => Err(ParseError {
            code: 2,
            message: format!("missing value for {option}\n\n{}", help_text("shariawatch")),
        }),
    }
}
