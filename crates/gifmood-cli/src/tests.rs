use super::*;

#[test]
fn parses_random_command() {
    let cli = Cli::try_parse_from(["gifmood-cli", "random", "happy"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Random { ref emotion } if emotion == "happy"
    ));
}

#[test]
fn random_requires_an_emotion() {
    assert!(Cli::try_parse_from(["gifmood-cli", "random"]).is_err());
}

#[test]
fn trending_defaults_to_ten() {
    let cli = Cli::try_parse_from(["gifmood-cli", "trending"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Trending { limit: 10 }));
}

#[test]
fn trending_accepts_negative_limit() {
    let cli = Cli::try_parse_from(["gifmood-cli", "trending", "--limit", "-5"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Trending { limit: -5 }));
}

#[test]
fn parses_emotions_and_check() {
    let cli = Cli::try_parse_from(["gifmood-cli", "emotions"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Emotions));

    let cli = Cli::try_parse_from(["gifmood-cli", "check"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Check));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["gifmood-cli"]).is_err());
}
