//! A typing session driven by lines of input.
//!
//! Each input line is typed into a [`Typer`] one character at a time through
//! an [`InputRouter`], and the rendered text is printed after every line.
//! Lines starting with `:` are commands:
//!
//! ```text
//! :focus          focus the typer
//! :blur           unfocus the typer
//! :bs [n]         send n backspaces (default 1)
//! :nl             send a newline
//! :tab            send a tab
//! :wrap on|off    toggle word wrap
//! :width <w>      set the wrap width
//! :clear          empty the value
//! :quit           stop reading input
//! ```

use std::{
    cell::RefCell,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use malena::{
    CharacterInput, FocusState, FontConfig, FontManager, GlyphMetrics, InputRouter, Text, Typer,
    WrapConfig,
};
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthChar;

/// CLI flags for the typergym example.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding font files. Without it, text is measured in
    /// terminal columns.
    #[clap(long)]
    pub font_dir: Option<PathBuf>,

    /// Pixel size fonts are measured at.
    #[clap(long)]
    pub font_size: Option<f32>,

    /// Wrap at this width. Enables word wrap.
    #[clap(short, long)]
    pub width: Option<f32>,

    /// JSON file with wrap settings.
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Start unfocused.
    #[clap(long)]
    pub blur: bool,

    /// Log filter, e.g. "debug" or "malena=trace".
    #[clap(long, default_value = "warn")]
    pub log: String,
}

/// Install a stderr log subscriber using `filter`.
pub fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}

/// Measures glyphs in terminal columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermColumns;

impl GlyphMetrics for TermColumns {
    fn advance(&self, ch: char) -> Option<f32> {
        if ch == '\t' {
            return Some(4.0);
        }
        ch.width().map(|w| w as f32)
    }
}

/// Load wrap settings from a JSON file.
pub fn load_wrap_config(path: &Path) -> Result<WrapConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: WrapConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config.normalized())
}

/// What the session did with a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep reading.
    Continue,
    /// Stop reading.
    Quit,
}

/// A typer wired to a router, with its metrics kept alive.
pub struct Session {
    /// The widget under test.
    typer: Rc<RefCell<Typer>>,
    /// Event delivery.
    router: InputRouter,
    /// Owns any loaded fonts.
    fonts: FontManager,
    /// Column metrics, used when no font is loaded.
    columns: Rc<TermColumns>,
}

impl Session {
    /// A session measuring in terminal columns.
    pub fn new(wrap: WrapConfig) -> Self {
        let columns = Rc::new(TermColumns);
        let text = Text::new().with_metrics(&columns).with_config(wrap);
        let typer = Rc::new(RefCell::new(Typer::with_text(text)));
        typer.borrow_mut().set_focus(FocusState::Focused);
        let mut router = InputRouter::new();
        router.register(&typer);
        Self {
            typer,
            router,
            fonts: FontManager::new(&FontConfig::default()),
            columns,
        }
    }

    /// A session measuring with the default font from `fonts`.
    pub fn with_fonts(wrap: WrapConfig, mut fonts: FontManager) -> Result<Self> {
        let id = FontManager::default_font();
        let font = fonts
            .get(id)
            .with_context(|| format!("loading {}", fonts.path(id).display()))?;
        tracing::info!(name = ?font.name(), size = font.size(), "measuring with font");
        let mut session = Self::new(wrap);
        session.typer.borrow_mut().text_mut().set_metrics(&font);
        session.fonts = fonts;
        Ok(session)
    }

    /// Type a single character.
    pub fn send(&mut self, c: char) {
        self.router.dispatch(CharacterInput::from(c));
    }

    /// Handle a line of input.
    pub fn line(&mut self, line: &str) -> Result<Step> {
        let Some(cmd) = line.strip_prefix(':') else {
            for c in line.chars() {
                self.send(c);
            }
            return Ok(Step::Continue);
        };
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        match (name, arg) {
            ("focus", None) => self.set_focus(FocusState::Focused),
            ("blur", None) => self.set_focus(FocusState::Unfocused),
            ("bs", n) => {
                let n: usize = match n {
                    Some(n) => n.parse().context("backspace count")?,
                    None => 1,
                };
                for _ in 0..n {
                    self.send('\u{8}');
                }
            }
            ("nl", None) => self.send('\n'),
            ("tab", None) => self.send('\t'),
            ("wrap", Some("on")) => self.typer.borrow_mut().text_mut().set_word_wrap(true),
            ("wrap", Some("off")) => self.typer.borrow_mut().text_mut().set_word_wrap(false),
            ("width", Some(w)) => {
                let w: f32 = w.parse().context("wrap width")?;
                self.typer.borrow_mut().text_mut().set_max_width(w);
            }
            ("clear", None) => self.typer.borrow_mut().clear(),
            ("quit", None) => return Ok(Step::Quit),
            _ => bail!("unknown command: {line}"),
        }
        Ok(Step::Continue)
    }

    /// Set the typer's focus state.
    pub fn set_focus(&mut self, focus: FocusState) {
        self.typer.borrow_mut().set_focus(focus);
    }

    /// The raw typed value.
    pub fn value(&self) -> String {
        self.typer.borrow().value().to_string()
    }

    /// The rendered text.
    pub fn rendered(&self) -> String {
        self.typer.borrow().render_text().to_string()
    }

    /// Write the rendered text, one framed line per rendered line.
    pub fn print(&self, out: &mut impl Write) -> Result<()> {
        let typer = self.typer.borrow();
        let state = typer.focus();
        writeln!(out, "-- {state}, {} chars", typer.value().chars().count())?;
        for line in typer.render_text().split('\n') {
            writeln!(out, "| {line}")?;
        }
        Ok(())
    }

    /// The font table backing this session.
    pub fn fonts(&self) -> &FontManager {
        &self.fonts
    }

    /// Column metrics shared with the display text.
    pub fn columns(&self) -> &Rc<TermColumns> {
        &self.columns
    }
}

/// Resolve wrap settings from the environment, a config file and flags, in
/// increasing order of precedence.
pub fn wrap_config(args: &Args) -> Result<WrapConfig> {
    let mut wrap = match &args.config {
        Some(path) => load_wrap_config(path)?,
        None => WrapConfig::from_env(),
    };
    if let Some(w) = args.width {
        wrap = WrapConfig::wrapped(w);
    }
    Ok(wrap)
}

/// Run a session over `input`, printing to `out`.
pub fn run(args: &Args, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let wrap = wrap_config(args)?;
    let mut session = match &args.font_dir {
        Some(dir) => {
            let mut fonts = FontConfig::from_env();
            fonts.font_dir.clone_from(dir);
            if let Some(px) = args.font_size {
                fonts.size_px = px;
            }
            Session::with_fonts(wrap, FontManager::new(&fonts))?
        }
        None => Session::new(wrap),
    };
    if args.blur {
        session.set_focus(FocusState::Unfocused);
    }
    for line in input.lines() {
        let line = line?;
        match session.line(&line) {
            Ok(Step::Quit) => break,
            Ok(Step::Continue) => session.print(&mut out)?,
            Err(e) => writeln!(out, "!! {e:#}")?,
        }
    }
    Ok(())
}
