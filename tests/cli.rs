use clap::Parser;
use docmatch::Mode;
use docmatch::cli::{Cli, Commands, CompareArgs, ModeArg, OutputFormat};

#[test]
fn compare_flag_parsing() {
    // Given
    let argv = vec![
        "docmatch", "compare", "main.txt", "corpus", "--mode", "whole", "--format", "json",
        "--ext", "txt", "--ext", "md", "--jobs", "2", "--sort",
    ];

    // When
    let cmd = Cli::parse_from(argv);

    // Then
    match cmd.command {
        Commands::Compare(CompareArgs { mode, format, extensions, jobs, sort, .. }) => {
            assert_eq!(mode, ModeArg::Whole);
            assert_eq!(Mode::from(mode), Mode::Whole);
            assert!(matches!(format, OutputFormat::Json));
            assert_eq!(extensions, vec!["txt", "md"]);
            assert_eq!(jobs, Some(2));
            assert!(sort);
        }
        _ => panic!("expected Compare command"),
    }
}

#[test]
fn compare_defaults_to_paragraph_mode() {
    let cmd = Cli::parse_from(["docmatch", "compare", "main.txt", "corpus"]);

    match cmd.command {
        Commands::Compare(args) => {
            assert_eq!(Mode::from(args.mode), Mode::Paragraphs);
            assert!(matches!(args.format, OutputFormat::Text));
            assert!(args.extensions.is_empty());
            assert_eq!(args.jobs, None);
        }
        _ => panic!("expected Compare command"),
    }
}
