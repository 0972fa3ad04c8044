/// The two highlight colours of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Alert,
}

/// Precomputed class names for one accent. Components pick from here instead
/// of building class names out of content data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentStyle {
    pub text: &'static str,
    pub border: &'static str,
    pub border_hover: &'static str,
    pub glow: &'static str,
    pub chip: &'static str,
    pub dot: &'static str,
    pub sweep: &'static str,
}

const CYAN: AccentStyle = AccentStyle {
    text: "text-cyan",
    border: "border-cyan-soft",
    border_hover: "border-cyan",
    glow: "glow-cyan",
    chip: "chip-cyan",
    dot: "dot-cyan",
    sweep: "sweep-cyan",
};

const ALERT: AccentStyle = AccentStyle {
    text: "text-alert",
    border: "border-alert-soft",
    border_hover: "border-alert",
    glow: "glow-alert",
    chip: "chip-alert",
    dot: "dot-alert",
    sweep: "sweep-alert",
};

impl Accent {
    pub const fn style(self) -> &'static AccentStyle {
        match self {
            Accent::Cyan => &CYAN,
            Accent::Alert => &ALERT,
        }
    }
}

/// Base stylesheet shared by every section.
pub const GLOBAL_CSS: &str = r#"
    :root {
        --abyss: #05070d;
        --abyss-light: #0d1322;
        --cyan: #00d4ff;
        --alert: #ff3b3b;
        --reveal-duration: 700ms;
    }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: var(--abyss);
        color: #fff;
        font-family: "Rajdhani", "Segoe UI", Roboto, sans-serif;
        overflow-x: hidden;
    }
    .font-display { font-family: "Orbitron", "Segoe UI", sans-serif; letter-spacing: 0.08em; }
    .muted { color: #9ca3af; }
    .faint { color: #6b7280; }
    .text-cyan { color: var(--cyan); }
    .text-alert { color: var(--alert); }
    .text-gradient-cyan {
        background: linear-gradient(90deg, var(--cyan), #7df3ff);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .border-cyan-soft { border: 1px solid rgba(0, 212, 255, 0.3); }
    .border-alert-soft { border: 1px solid rgba(255, 59, 59, 0.3); }
    .border-cyan { border-color: var(--cyan) !important; }
    .border-alert { border-color: var(--alert) !important; }
    .glow-cyan { box-shadow: 0 0 20px rgba(0, 212, 255, 0.35), 0 0 40px rgba(0, 212, 255, 0.15); }
    .glow-alert { box-shadow: 0 0 20px rgba(255, 59, 59, 0.35), 0 0 40px rgba(255, 59, 59, 0.15); }
    .chip-cyan { background: rgba(0, 212, 255, 0.12); color: var(--cyan); }
    .chip-alert { background: rgba(255, 59, 59, 0.12); color: var(--alert); }
    .dot-cyan, .dot-alert { width: 6px; height: 6px; border-radius: 50%; flex-shrink: 0; }
    .dot-cyan { background: var(--cyan); }
    .dot-alert { background: var(--alert); }
    .sweep-cyan { background: linear-gradient(transparent, rgba(0, 212, 255, 0.2), transparent); }
    .sweep-alert { background: linear-gradient(transparent, rgba(255, 59, 59, 0.2), transparent); }

    .reveal {
        transition: opacity var(--reveal-duration) ease-out, transform var(--reveal-duration) ease-out;
    }
    .reveal.rise { opacity: 0; transform: translateY(2.5rem); }
    .reveal.rise-far { opacity: 0; transform: translateY(5rem); }
    .reveal.slide-left { opacity: 0; transform: translateX(-2.5rem); }
    .reveal.fade { opacity: 0; }
    .reveal.grow { opacity: 0; transform: scale(0); }
    .reveal.revealed { opacity: 1; transform: none; }

    .section {
        position: relative;
        min-height: 100vh;
        width: 100%;
        padding: 6rem 1.5rem;
        box-sizing: border-box;
        background: var(--abyss);
    }
    .section-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, var(--abyss), rgba(13, 19, 34, 0.4), var(--abyss));
        pointer-events: none;
    }
    .section-content { position: relative; z-index: 1; margin: 0 auto; max-width: 72rem; }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-eyebrow { display: block; font-size: 0.75rem; letter-spacing: 0.3em; color: rgba(0, 212, 255, 0.6); margin-bottom: 1rem; }
    .section-title { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; margin: 0 0 1.5rem; }
    .section-lead { font-size: 1.125rem; color: #9ca3af; max-width: 48rem; margin: 0 auto; line-height: 1.6; }
    .divider {
        width: 6rem;
        height: 2px;
        margin: 1.5rem auto 0;
        background: linear-gradient(90deg, transparent, var(--cyan), transparent);
    }
    .subheading { font-size: 1.25rem; font-weight: 700; text-align: center; margin-bottom: 2rem; }

    .card {
        position: relative;
        overflow: hidden;
        border-radius: 0.75rem;
        background: rgba(13, 19, 34, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 1.5rem;
        transition: border-color 300ms, box-shadow 300ms, transform 300ms;
    }
    .card:hover { border-color: rgba(0, 212, 255, 0.4); }
    .card.lift:hover { transform: scale(1.03); }
    .grid { display: grid; gap: 1rem; }
    .grid-2 { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
    .grid-3 { grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
    .grid-4 { grid-template-columns: repeat(auto-fit, minmax(11rem, 1fr)); }
    .bullets { list-style: none; padding: 0; margin: 0; }
    .bullets li { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; font-size: 0.85rem; color: #9ca3af; }
    .pill {
        display: inline-block;
        padding: 0.3rem 0.9rem;
        border-radius: 999px;
        font-size: 0.8rem;
        letter-spacing: 0.08em;
    }
    .icon { display: inline-flex; align-items: center; justify-content: center; font-style: normal; }
    .icon-box { padding: 0.6rem; border-radius: 0.5rem; background: rgba(0, 212, 255, 0.15); }
    .corners span { position: absolute; width: 1rem; height: 1rem; border-color: var(--cyan); border-style: solid; border-width: 0; }
    .corners .tl { top: 0; left: 0; border-top-width: 2px; border-left-width: 2px; }
    .corners .tr { top: 0; right: 0; border-top-width: 2px; border-right-width: 2px; }
    .corners .bl { bottom: 0; left: 0; border-bottom-width: 2px; border-left-width: 2px; }
    .corners .br { bottom: 0; right: 0; border-bottom-width: 2px; border-right-width: 2px; }
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        cursor: pointer;
        font-family: "Orbitron", sans-serif;
        font-size: 0.85rem;
        letter-spacing: 0.1em;
        transition: all 300ms;
        text-decoration: none;
    }
    .btn:hover { transform: scale(1.05); }
    .btn-cyan { background: rgba(0, 212, 255, 0.2); color: var(--cyan); border: 1px solid rgba(0, 212, 255, 0.5); }
    .btn-cyan:hover { background: rgba(0, 212, 255, 0.3); border-color: var(--cyan); }
    .btn-alert { background: rgba(255, 59, 59, 0.2); color: var(--alert); border: 1px solid rgba(255, 59, 59, 0.5); }
    .btn-alert:hover { background: rgba(255, 59, 59, 0.3); border-color: var(--alert); }
    @keyframes pulse { 50% { opacity: 0.5; } }
    .pulse { animation: pulse 2s ease-in-out infinite; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_accent_has_its_own_bundle() {
        let cyan = Accent::Cyan.style();
        let alert = Accent::Alert.style();
        assert_ne!(cyan, alert);
        assert_eq!(cyan.text, "text-cyan");
        assert_eq!(alert.glow, "glow-alert");
    }

    #[test]
    fn bundled_classes_exist_in_the_stylesheet() {
        for accent in [Accent::Cyan, Accent::Alert] {
            let s = accent.style();
            for class in [s.text, s.border, s.border_hover, s.glow, s.chip, s.dot, s.sweep] {
                assert!(
                    GLOBAL_CSS.contains(&format!(".{}", class)),
                    "missing .{} in GLOBAL_CSS",
                    class
                );
            }
        }
    }
}
