use crate::{command::InputArg, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct FetchArg {
    #[clap(flatten)]
    input: InputArg,
    /// Download even if the input file already exists
    #[arg(long)]
    force: bool,
}

pub(crate) fn run(arg: &FetchArg) -> anyhow::Result<()> {
    if arg.force {
        anyhow::ensure!(
            !arg.input.offline,
            "--force and --offline cannot be used together"
        );
        util::download(&arg.input.url, &arg.input.input)?;
    } else {
        util::ensure_input(&arg.input)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_and_offline_are_exclusive() {
        let arg = FetchArg {
            input: InputArg {
                offline: true,
                ..InputArg::default()
            },
            force: true,
        };
        let err = run(&arg).unwrap_err();
        assert!(err.to_string().contains("--force and --offline"));
    }
}
