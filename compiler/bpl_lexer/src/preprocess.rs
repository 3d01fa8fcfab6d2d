//! `#if` / `#elsif` / `#else` / `#endif` selection by defined names.
//!
//! Directive lines and excluded lines are blanked, never removed, so line
//! numbers in the output match the input. A condition is a name with any
//! number of `!` prefixes, each flipping its sense.

/// Preprocessed text plus non-fatal problems.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Preprocessed {
    pub text: String,
    pub warnings: Vec<PreprocessWarning>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreprocessWarning {
    /// 1-based line of the offending directive.
    pub line: u32,
    pub message: String,
}

struct Region {
    /// Line of the opening `#if`.
    opened_at: u32,
    /// Some branch of this region has been selected.
    taken: bool,
    /// The current branch is selected.
    active: bool,
}

enum Directive<'a> {
    If(&'a str),
    Elsif(&'a str),
    Else,
    Endif,
}

fn directive(line: &str) -> Option<Directive<'_>> {
    let rest = line.trim_start().strip_prefix('#')?;
    let word_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (word, arg) = rest.split_at(word_end);
    // `#ifx` is an identifier, not a directive
    if !arg.is_empty() && !arg.starts_with(char::is_whitespace) {
        return None;
    }
    match word {
        "if" => Some(Directive::If(arg.trim())),
        "elsif" => Some(Directive::Elsif(arg.trim())),
        "else" => Some(Directive::Else),
        "endif" => Some(Directive::Endif),
        _ => None,
    }
}

fn holds(condition: &str, defines: &[String]) -> bool {
    let mut sense = true;
    let mut name = condition;
    while let Some(rest) = name.strip_prefix('!') {
        sense = !sense;
        name = rest.trim_start();
    }
    defines.iter().any(|d| d == name) == sense
}

/// Select the regions of `source` enabled by `defines`.
pub fn preprocess(source: &str, defines: &[String]) -> Preprocessed {
    let mut out = String::with_capacity(source.len());
    let mut warnings = Vec::new();
    let mut regions: Vec<Region> = Vec::new();

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let newline = if line.ends_with('\n') { "\n" } else { "" };

        match directive(line) {
            Some(Directive::If(cond)) => {
                let active = holds(cond, defines);
                regions.push(Region {
                    opened_at: line_no,
                    taken: active,
                    active,
                });
            }
            Some(Directive::Elsif(cond)) => match regions.last_mut() {
                Some(region) => {
                    region.active = !region.taken && holds(cond, defines);
                    region.taken |= region.active;
                }
                None => warnings.push(PreprocessWarning {
                    line: line_no,
                    message: "#elsif without matching #if".to_string(),
                }),
            },
            Some(Directive::Else) => match regions.last_mut() {
                Some(region) => {
                    region.active = !region.taken;
                    region.taken = true;
                }
                None => warnings.push(PreprocessWarning {
                    line: line_no,
                    message: "#else without matching #if".to_string(),
                }),
            },
            Some(Directive::Endif) => {
                if regions.pop().is_none() {
                    warnings.push(PreprocessWarning {
                        line: line_no,
                        message: "#endif without matching #if".to_string(),
                    });
                }
            }
            None => {
                if regions.iter().all(|r| r.active) {
                    out.push_str(line);
                    continue;
                }
            }
        }
        out.push_str(newline);
    }

    for region in regions {
        warnings.push(PreprocessWarning {
            line: region.opened_at,
            message: "#if without matching #endif".to_string(),
        });
    }

    Preprocessed {
        text: out,
        warnings,
    }
}
