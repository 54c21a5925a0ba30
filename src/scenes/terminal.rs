use crate::{
    animation::{
        interpolate::{InterpolateOpts, interpolate},
        ops::{Reveal, Typewriter, beat, blink},
        spring::{Spring, SpringConfig},
    },
    foundation::{
        core::{Point, Rect, Rgba8Premul},
        error::PromoResult,
    },
    scene::model::{Node, SceneTree},
    scenes::{
        layout::{MONO_ADVANCE, SANS_ADVANCE, text_width},
        palette::term,
        scene::{Scene, SceneCtx, SceneSetup},
    },
};

pub const COMMAND: &str = "npx aeoengine optimize --brand \"YourBrand\"";
pub const CHARS_PER_SEC: f64 = 18.0;

pub const LOGO: [&str; 6] = [
    r"    _    _____ ___  _____             _",
    r"   / \  | ____/ _ \| ____|_ __   __ _(_)_ __   ___",
    r"  / _ \ |  _|| | | |  _| | '_ \ / _` | | '_ \ / _ \",
    r" / ___ \| |__| |_| | |___| | | | (_| | | | | |  __/",
    r"/_/   \_\_____\___/|_____|_| |_|\__, |_|_| |_|\___|",
    r"                                |___/",
];

pub const OUTPUT_LINES: [&str; 20] = [
    "",
    "┌  AEOEngine.ai",
    "│",
    "◇  Connecting to AI Search Optimization Engine...",
    "│",
    "◇  Analyzing your brand presence across:",
    "│     ✓ Google & Bing Search",
    "│     ✓ ChatGPT & GPT-4",
    "│     ✓ Claude & Anthropic",
    "│     ✓ Perplexity AI",
    "│     ✓ Google Gemini",
    "│",
    "●  Found 847 AI-generated answers mentioning competitors",
    "│",
    "◇  Optimization opportunities detected:",
    "│     → 12 high-impact content gaps",
    "│     → 34 citation opportunities",
    "│     → 156 answer ownership targets",
    "│",
    "└  Ready to dominate AI search. Auto-pilot engaged.",
];

const INSET: f64 = 32.0;
const TITLE_BAR_H: f64 = 48.0;
const PADDING: f64 = 24.0;
const PROMPT_PX: f64 = 24.0;
const LOGO_PX: f64 = 14.0;
const LOGO_LEADING: f64 = 20.0;
const LINE_PX: f64 = 18.0;
const LINE_LEADING: f64 = 29.0;

/// Text color of an output line, keyed on its status marker.
pub fn line_color(line: &str) -> Rgba8Premul {
    if line.contains('●') {
        term::ALERT
    } else if line.contains('✓') {
        term::OK
    } else if line.contains('→') {
        term::HINT
    } else {
        term::TEXT
    }
}

/// A terminal window that slides up, types the install command, streams the optimizer output and
/// flips away on its hinge once the act's nominal length is reached.
#[derive(Clone, Debug)]
pub struct TerminalScene {
    command: Typewriter,
    output_start: f64,
    lines: Reveal,
    blink_period: f64,
    slide_in: Spring,
    flip_out: Spring,
}

impl TerminalScene {
    pub fn new(setup: &SceneSetup) -> PromoResult<Self> {
        let fps = setup.fps;
        let command = Typewriter::new(COMMAND, 0.0, CHARS_PER_SEC, fps)?;
        let output_start = command.end() + beat(fps, 0.5);
        let per_line = beat(fps, 0.08);
        let lines = Reveal::new(output_start + per_line * 3.0, OUTPUT_LINES.len(), per_line)?;
        let settle = SpringConfig::new(200.0, 100.0, 1.0)?;
        Ok(Self {
            command,
            output_start,
            lines,
            blink_period: beat(fps, 0.5),
            slide_in: Spring::new(settle).from_to(700.0, 80.0),
            flip_out: Spring::new(settle).from_to(0.0, -90.0),
        })
    }

    /// Frame the prompt line is replaced by program output.
    pub fn output_start(&self) -> f64 {
        self.output_start
    }

    pub fn typing_end(&self) -> f64 {
        self.command.end()
    }

    /// Output lines visible at `frame`.
    pub fn visible_lines(&self, frame: f64) -> usize {
        if frame < self.output_start {
            return 0;
        }
        self.lines.visible(frame)
    }

    fn cursor_opacity(&self, frame: f64) -> f64 {
        if self.command.is_typing(frame) || blink(frame, self.blink_period) {
            1.0
        } else {
            0.0
        }
    }

    fn prompt(&self, frame: f64, left: f64, baseline: f64) -> Node {
        let adv = PROMPT_PX * MONO_ADVANCE;
        let command_x = left + adv * 2.0 + 16.0;
        let typed = self.command.visible_text(frame);
        let mut children = vec![
            Node::text("tilde", Point::new(left, baseline), "~", PROMPT_PX)
                .weight(600)
                .fill(term::PROMPT),
            Node::text("dollar", Point::new(left + adv + 8.0, baseline), "$", PROMPT_PX)
                .fill(term::TEXT),
            Node::text("command", Point::new(command_x, baseline), typed, PROMPT_PX)
                .fill(term::COMMAND),
        ];
        if frame < self.output_start {
            let x = command_x + text_width(typed, PROMPT_PX, MONO_ADVANCE) + 2.0;
            children.push(
                Node::rect("cursor", Rect::new(x, baseline - 30.0, x + 16.0, baseline + 10.0))
                    .fill(term::CURSOR)
                    .opacity(self.cursor_opacity(frame)),
            );
        }
        Node::group("prompt", children)
    }

    fn output(&self, frame: f64, left: f64, top: f64, bottom: f64) -> Node {
        let logo = LOGO
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let y = top + LOGO_LEADING * (i + 1) as f64;
                Node::text(format!("logo_{i}"), Point::new(left, y), *row, LOGO_PX).fill(term::LOGO)
            })
            .collect();

        let lines_top = top + LOGO_LEADING * LOGO.len() as f64;
        let mut children = vec![Node::group("logo", logo)];
        // Overflow is hidden by the window, so rows past the bottom edge are not emitted.
        children.extend(
            OUTPUT_LINES
                .iter()
                .take(self.visible_lines(frame))
                .enumerate()
                .map(|(i, line)| (i, line, lines_top + LINE_LEADING * (i + 1) as f64))
                .take_while(|(_, _, y)| *y <= bottom)
                .map(|(i, line, y)| {
                    Node::text(format!("line_{i}"), Point::new(left, y), *line, LINE_PX)
                        .fill(line_color(line))
                }),
        );
        Node::group("output", children)
    }
}

impl Scene for TerminalScene {
    fn name(&self) -> &str {
        "terminal"
    }

    fn render(&self, ctx: &SceneCtx) -> SceneTree {
        let frame = ctx.frame;
        let span = ctx.span.max(1.0);
        let canvas = ctx.canvas.rect();
        let window = canvas.inset(-INSET);

        let translate_y = self.slide_in.sample(frame, ctx.fps);
        let rotate_y = interpolate(frame, &[0.0, span], &[8.0, -8.0], InterpolateOpts::extend());
        let scale = interpolate(frame, &[0.0, span], &[0.92, 1.0], InterpolateOpts::extend());
        let flip_x = if frame >= ctx.duration {
            self.flip_out.delay(ctx.duration).sample(frame, ctx.fps)
        } else {
            0.0
        };

        let bar_bottom = window.y0 + TITLE_BAR_H;
        let light_y = window.y0 + TITLE_BAR_H / 2.0;
        let lights = [term::CLOSE, term::MINIMIZE, term::ZOOM]
            .into_iter()
            .zip(["close", "minimize", "zoom"])
            .enumerate()
            .map(|(i, (color, id))| {
                Node::circle(id, Point::new(window.x0 + 23.0 + 22.0 * i as f64, light_y), 7.0)
                    .fill(color)
            })
            .collect();
        let title = "AEOEngine.ai - Terminal";
        let title_x = window.center().x - text_width(title, 14.0, SANS_ADVANCE) / 2.0;

        let content_left = window.x0 + PADDING;
        let prompt_baseline = bar_bottom + PADDING + PROMPT_PX;

        let mut chrome = vec![
            Node::rect("frame", window).rounded(12.0).fill(term::WINDOW),
            Node::rect("title_bar", Rect::new(window.x0, window.y0, window.x1, bar_bottom))
                .rounded(12.0)
                .fill(term::TITLE_BAR),
            Node::line(
                "title_rule",
                Point::new(window.x0, bar_bottom),
                Point::new(window.x1, bar_bottom),
            )
            .stroke(term::RULE, 1.0),
            Node::group("lights", lights),
            Node::text("title", Point::new(title_x, light_y + 5.0), title, 14.0)
                .weight(500)
                .fill(term::TITLE),
            self.prompt(frame, content_left, prompt_baseline),
        ];
        if frame >= self.output_start {
            chrome.push(self.output(
                frame,
                content_left,
                prompt_baseline + 16.0,
                window.y1 - PADDING,
            ));
        }

        let hinge = Point::new(window.center().x, window.y1);
        let flipper = Node::group("window", chrome)
            .tilt(flip_x, 0.0)
            .origin(hinge);
        SceneTree::new(vec![
            Node::group("terminal", vec![flipper])
                .translate(0.0, translate_y)
                .tilt(18.0, rotate_y)
                .scale(scale)
                .origin(canvas.center()),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/terminal.rs"]
mod tests;
