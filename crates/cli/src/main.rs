use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use symmetry::geom2::DEFAULT_PRECISION;
use symmetry::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "symmetry")]
#[command(about = "Find the lines of symmetry in a scatterplot")]
struct Cmd {
    /// Significant decimal digits used for arithmetic; comparisons use one less
    #[arg(long, short, global = true, default_value_t = DEFAULT_PRECISION)]
    precision: u64,

    /// Log level (trace, debug, info, warn, error); logs go to stderr
    #[arg(long, short, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read whitespace-separated `x,y` points from stdin and print symmetry lines
    Find {
        /// Print every candidate line with its verdict
        #[arg(long)]
        all: bool,
        /// One JSON object per line instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a random mirror-symmetric scatterplot as `x,y` tokens
    Sample {
        #[arg(long, default_value_t = 4)]
        pairs: usize,
        #[arg(long, default_value_t = 1)]
        on_axis: usize,
        #[arg(long, default_value_t = 50)]
        extent: i64,
        #[arg(long, value_enum, default_value_t = AxisArg::Vertical)]
        axis: AxisArg,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisArg {
    Vertical,
    Horizontal,
    Diagonal,
    AntiDiagonal,
}

impl From<AxisArg> for MirrorAxis {
    fn from(a: AxisArg) -> Self {
        match a {
            AxisArg::Vertical => MirrorAxis::Vertical,
            AxisArg::Horizontal => MirrorAxis::Horizontal,
            AxisArg::Diagonal => MirrorAxis::Diagonal,
            AxisArg::AntiDiagonal => MirrorAxis::AntiDiagonal,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(io::stderr)
        .init();
    let geom = GeomCfg::new(cmd.precision)?;
    match cmd.action {
        Action::Find { all, json } => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading points from stdin")?;
            find(&input, &geom, all, json, &mut io::stdout().lock())
        }
        Action::Sample {
            pairs,
            on_axis,
            extent,
            axis,
            seed,
            index,
        } => {
            let cfg = ScatterCfg {
                pairs,
                on_axis,
                extent,
                axis: axis.into(),
            };
            sample(cfg, ReplayToken { seed, index }, &geom, &mut io::stdout().lock())
        }
    }
}

fn find(input: &str, geom: &GeomCfg, all: bool, json: bool, out: &mut impl Write) -> Result<()> {
    let points = parse_points(input, geom)?;
    tracing::info!(points = points.len(), precision = geom.prec(), "find");
    let finder = SymmetryLineFinder::new(points, geom).context("building symmetry finder")?;
    let mut found = 0usize;
    for (is_symmetry, line) in finder.find_all() {
        found += usize::from(is_symmetry);
        if !(all || is_symmetry) {
            continue;
        }
        if json {
            let record = LineRecord::new(is_symmetry, &line, geom);
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else if all {
            let verdict = if is_symmetry { "symmetric" } else { "rejected" };
            writeln!(out, "{verdict} {line}")?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    tracing::info!(found, "done");
    Ok(())
}

fn sample(cfg: ScatterCfg, tok: ReplayToken, geom: &GeomCfg, out: &mut impl Write) -> Result<()> {
    let Some(scatter) = draw_symmetric_scatter(cfg, tok, geom) else {
        bail!("sample produced fewer than 3 distinct points; raise --pairs or --on-axis");
    };
    tracing::info!(axis = %scatter.axis, points = scatter.points.len(), "sample");
    let tokens: Vec<String> = scatter
        .points
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect();
    writeln!(out, "{}", tokens.join(" "))?;
    Ok(())
}

/// Parse whitespace-separated `x,y` tokens. Fields after the second are ignored.
fn parse_points(input: &str, geom: &GeomCfg) -> Result<Vec<Point>> {
    input
        .split_whitespace()
        .map(|token| {
            let mut fields = token.split(',');
            let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
                bail!("expected `x,y`, got `{token}`");
            };
            Point::parse(x, y, geom).with_context(|| format!("parsing point `{token}`"))
        })
        .collect()
}

/// JSON shape of one reported line; decimals are normalized strings.
#[derive(Debug, Serialize)]
struct LineRecord {
    symmetry: bool,
    #[serde(flatten)]
    form: FormRecord,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum FormRecord {
    Sloped { slope: String, intercept: String },
    Vertical { x: String },
}

impl LineRecord {
    fn new(symmetry: bool, line: &Line, geom: &GeomCfg) -> Self {
        let form = match line.form() {
            LineForm::Sloped { slope, intercept } => FormRecord::Sloped {
                slope: geom.normalize(slope).to_string(),
                intercept: geom.normalize(intercept).to_string(),
            },
            LineForm::Vertical { x } => FormRecord::Vertical {
                x: geom.normalize(x).to_string(),
            },
        };
        Self { symmetry, form }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_and_ignores_extra_fields() {
        let geom = GeomCfg::default();
        let pts = parse_points(" 0,50\n50,50,7\t50,0 ", &geom).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Point::new(50, 50, &geom));
        assert!(parse_points("", &geom).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_tokens() {
        let geom = GeomCfg::default();
        let err = parse_points("1,2 3", &geom).unwrap_err();
        assert!(err.to_string().contains("`3`"), "{err}");
        let err = parse_points("1,2 3,x", &geom).unwrap_err();
        assert!(err.to_string().contains("`3,x`"), "{err}");
        assert!(err.root_cause().to_string().contains("`x`"));
    }

    #[test]
    fn json_record_shape() {
        let geom = GeomCfg::default();
        let sloped = LineRecord::new(true, &Line::sloped(1, 0, &geom), &geom);
        let v: serde_json::Value = serde_json::to_value(&sloped).unwrap();
        assert_eq!(v["symmetry"], true);
        assert_eq!(v["kind"], "sloped");
        assert_eq!(v["slope"], "1");
        assert_eq!(v["intercept"], "0");

        let vertical = LineRecord::new(false, &Line::vertical(25, &geom), &geom);
        let v: serde_json::Value = serde_json::to_value(&vertical).unwrap();
        assert_eq!(v["kind"], "vertical");
        assert_eq!(v["symmetry"], false);
        assert!(v.get("slope").is_none());
    }

    fn run_find(input: &str, geom: &GeomCfg, all: bool, json: bool) -> Result<Vec<String>> {
        let mut out = Vec::new();
        find(input, geom, all, json, &mut out)?;
        Ok(String::from_utf8(out)?.lines().map(str::to_string).collect())
    }

    const SQUARE: &str = "0,0 0,50\n50,50 50,0";

    #[test]
    fn find_prints_symmetry_lines_of_square() {
        let geom = GeomCfg::default();
        let lines = run_find(SQUARE, &geom, false, false).unwrap();
        let expected: Vec<String> = [
            Line::sloped(0, 25, &geom),
            Line::vertical(25, &geom),
            Line::sloped(1, 0, &geom),
            Line::sloped(-1, 50, &geom),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(lines, expected);
        assert_eq!(lines[2], "Line(m=1,b=0)");
    }

    #[test]
    fn find_all_prefixes_each_verdict() {
        let geom = GeomCfg::new(100).unwrap();
        let lines = run_find("0,50 50,50 50,0", &geom, true, false).unwrap();
        assert_eq!(
            lines,
            vec![
                format!("rejected {}", Line::sloped(-2, 100, &geom)),
                format!("symmetric {}", Line::sloped(1, 0, &geom)),
                format!("rejected {}", Line::sloped(GeomCfg::parse("-0.5").unwrap(), 50, &geom)),
            ]
        );

        let square = run_find(SQUARE, &GeomCfg::default(), true, false).unwrap();
        assert_eq!(square.len(), 4);
        assert!(square.iter().all(|l| l.starts_with("symmetric Line(")));
    }

    #[test]
    fn find_json_emits_one_record_per_line() {
        let geom = GeomCfg::default();
        let lines = run_find(SQUARE, &geom, false, true).unwrap();
        let records: Vec<serde_json::Value> = lines
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let kinds: Vec<&str> = records.iter().map(|r| r["kind"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["sloped", "vertical", "sloped", "sloped"]);
        assert!(records.iter().all(|r| r["symmetry"] == true));
        assert_eq!(records[0]["slope"], "0");
        assert_eq!(records[0]["intercept"], "25");
        assert_eq!(records[1]["x"], "25");
        assert_eq!(records[2]["slope"], "1");
    }

    #[test]
    fn find_rejects_two_points() {
        let mut out = Vec::new();
        let err = find("1.1,2.2 3.3,4.4", &GeomCfg::default(), false, false, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "building symmetry finder");
        assert_eq!(
            err.downcast_ref::<GeomError>(),
            Some(&GeomError::TooFewPoints {
                distinct: 2,
                supplied: 2
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn sample_prints_reproducible_tokens() {
        let geom = GeomCfg::default();
        let draw = |seed| {
            let mut out = Vec::new();
            sample(ScatterCfg::default(), ReplayToken { seed, index: 0 }, &geom, &mut out).unwrap();
            String::from_utf8(out).unwrap()
        };
        let text = draw(7);
        assert_eq!(text, draw(7));
        let points = parse_points(&text, &geom).unwrap();
        assert!(points.len() >= 3);
    }

    #[test]
    fn cli_args() {
        let cmd = Cmd::try_parse_from(["symmetry", "-p", "30", "find", "--all"]).unwrap();
        assert_eq!(cmd.precision, 30);
        assert_eq!(cmd.log_level, Level::WARN);
        assert!(matches!(cmd.action, Action::Find { all: true, json: false }));

        let cmd = Cmd::try_parse_from(["symmetry", "-p", "18446744073709551615", "find"]).unwrap();
        assert!(matches!(
            GeomCfg::new(cmd.precision),
            Err(GeomError::InvalidPrecision { .. })
        ));

        let cmd = Cmd::try_parse_from(["symmetry", "sample", "--axis", "anti-diagonal", "-l", "debug"])
            .unwrap();
        assert_eq!(cmd.log_level, Level::DEBUG);
        assert!(matches!(
            cmd.action,
            Action::Sample {
                axis: AxisArg::AntiDiagonal,
                pairs: 4,
                ..
            }
        ));
    }
}
