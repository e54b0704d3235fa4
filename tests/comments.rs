use lsystem::parse;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SOURCES: &[&str] = &[
    "generations:4\nangle:25.7\nscale:1\naxiom:F\nF -> F[+F]F[-F]F\n",
    "generations:5\nangle:20\nscale:0.6\naxiom:F\nF (0.5) -> F[+F]F\nF (0.5) -> F[-F]F\n",
    "generations:3\nangle:90\nscale:0.5\naxiom:X\nX -> F[+X][-X]FX\nF -> FF\n",
];

const COMMENTS: &[&str] = &[
    "# a comment\n",
    "#\n",
    "   # indented comment\n",
    "# F -> nothing\n",
];

// Puts `count` comment lines at random line boundaries of `source`
fn with_comment_lines(source: &str, count: usize, rng: &mut StdRng) -> String {
    let mut lines: Vec<String> = source.lines().map(|line| format!("{}\n", line)).collect();

    for _ in 0..count {
        let at = rng.gen_range(0..=lines.len());
        let comment = COMMENTS[rng.gen_range(0..COMMENTS.len())];
        lines.insert(at, comment.to_string());
    }

    lines.concat()
}

#[test]
fn comment_lines_change_nothing() {
    let mut rng = StdRng::seed_from_u64(0x15);

    for source in SOURCES {
        let expected = parse(source).unwrap();

        for count in 1..=5 {
            let commented = with_comment_lines(source, count, &mut rng);
            assert_eq!(parse(&commented).unwrap(), expected, "input: {:?}", commented);
        }
    }
}

#[test]
fn trailing_comments_change_nothing() {
    for source in SOURCES {
        let expected = parse(source).unwrap();
        let commented: String = source
            .lines()
            .map(|line| format!("{} # note\n", line))
            .collect();

        assert_eq!(parse(&commented).unwrap(), expected, "input: {:?}", commented);
    }
}
