use yew::prelude::*;

/// Decorative glyphs used across the content records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Brain,
    Users,
    Puzzle,
    Gamepad,
    Eye,
    Radio,
    Target,
    Music,
    GraduationCap,
    Accessibility,
    Camera,
    Activity,
    Map,
    Terminal,
    Shield,
    Microscope,
    User,
    Server,
    Package,
    Refresh,
    Baby,
    HeartCrack,
    DoorOpen,
    Skull,
    Globe,
    Heart,
    Book,
    Code,
    Volume,
    Hand,
    FileText,
    Briefcase,
    Cpu,
    Palette,
    Cube,
    Scale,
    Award,
    Rocket,
    Calendar,
    TrendingUp,
    Wallet,
    CreditCard,
    Landmark,
    Mail,
    Phone,
    ExternalLink,
    ChevronDown,
    Menu,
    Close,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Users => "👥",
            Icon::Puzzle => "🧩",
            Icon::Gamepad => "🎮",
            Icon::Eye => "👁",
            Icon::Radio => "📡",
            Icon::Target => "🎯",
            Icon::Music => "🎵",
            Icon::GraduationCap => "🎓",
            Icon::Accessibility => "♿",
            Icon::Camera => "📷",
            Icon::Activity => "📈",
            Icon::Map => "🗺",
            Icon::Terminal => "⌨",
            Icon::Shield => "🛡",
            Icon::Microscope => "🔬",
            Icon::User => "👤",
            Icon::Server => "🖥",
            Icon::Package => "📦",
            Icon::Refresh => "🔄",
            Icon::Baby => "🧸",
            Icon::HeartCrack => "💔",
            Icon::DoorOpen => "🚪",
            Icon::Skull => "💀",
            Icon::Globe => "🌐",
            Icon::Heart => "❤",
            Icon::Book => "📖",
            Icon::Code => "💻",
            Icon::Volume => "🔊",
            Icon::Hand => "✋",
            Icon::FileText => "📄",
            Icon::Briefcase => "💼",
            Icon::Cpu => "🔧",
            Icon::Palette => "🎨",
            Icon::Cube => "🧊",
            Icon::Scale => "⚖",
            Icon::Award => "🏅",
            Icon::Rocket => "🚀",
            Icon::Calendar => "📅",
            Icon::TrendingUp => "📊",
            Icon::Wallet => "👛",
            Icon::CreditCard => "💳",
            Icon::Landmark => "🏛",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::ExternalLink => "↗",
            Icon::ChevronDown => "⌄",
            Icon::Menu => "☰",
            Icon::Close => "✕",
        }
    }

    pub fn view(self) -> Html {
        html! { <i class="icon" aria-hidden="true">{ self.glyph() }</i> }
    }
}
