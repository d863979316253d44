//! SVG-иконки интерфейса

use contracts::shared::record_list::RecordAction;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Archive,
    ArrowLeft,
    ArrowRight,
    AlertTriangle,
    BarChart,
    Briefcase,
    Calendar,
    CheckCircle,
    ChevronDown,
    ChevronRight,
    Close,
    Download,
    Eye,
    FileText,
    Filter,
    Landmark,
    Package,
    PanelLeftClose,
    PanelLeftOpen,
    Pencil,
    PieChart,
    Plus,
    Receipt,
    Save,
    ShieldCheck,
    Sparkles,
    Trash,
    Users,
    Wallet,
}

impl Icon {
    /// Иконка кнопки действия в строке списка
    pub fn for_action(action: RecordAction) -> Self {
        match action {
            RecordAction::View => Icon::Eye,
            RecordAction::Edit => Icon::Pencil,
            RecordAction::Delete => Icon::Trash,
            RecordAction::Generate => Icon::Sparkles,
            RecordAction::Download => Icon::Download,
            RecordAction::Archive => Icon::Archive,
            RecordAction::MarkPaid => Icon::CheckCircle,
        }
    }

    fn size(&self) -> &'static str {
        match self {
            Icon::ChevronDown | Icon::ChevronRight | Icon::Close => "16",
            _ => "20",
        }
    }
}

pub fn icon(name: Icon) -> AnyView {
    let size = name.size();
    let body = match name {
        Icon::Archive => view! {
            <rect x="2" y="3" width="20" height="5" rx="1"/>
            <path d="M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8"/>
            <path d="M10 12h4"/>
        }
        .into_any(),
        Icon::ArrowLeft => view! {
            <path d="m12 19-7-7 7-7"/>
            <path d="M19 12H5"/>
        }
        .into_any(),
        Icon::ArrowRight => view! {
            <path d="M5 12h14"/>
            <path d="m12 5 7 7-7 7"/>
        }
        .into_any(),
        Icon::AlertTriangle => view! {
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/>
            <path d="M12 9v4"/>
            <path d="M12 17h.01"/>
        }
        .into_any(),
        Icon::BarChart => view! {
            <path d="M3 3v18h18"/>
            <path d="M18 17V9"/>
            <path d="M13 17V5"/>
            <path d="M8 17v-3"/>
        }
        .into_any(),
        Icon::Briefcase => view! {
            <rect x="2" y="7" width="20" height="14" rx="2"/>
            <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>
        }
        .into_any(),
        Icon::Calendar => view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
        }
        .into_any(),
        Icon::CheckCircle => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="m9 12 2 2 4-4"/>
        }
        .into_any(),
        Icon::ChevronDown => view! { <polyline points="6 9 12 15 18 9"/> }.into_any(),
        Icon::ChevronRight => view! { <polyline points="9 18 15 12 9 6"/> }.into_any(),
        Icon::Close => view! {
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        }
        .into_any(),
        Icon::Download => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="7 10 12 15 17 10"/>
            <line x1="12" y1="15" x2="12" y2="3"/>
        }
        .into_any(),
        Icon::Eye => view! {
            <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/>
            <circle cx="12" cy="12" r="3"/>
        }
        .into_any(),
        Icon::FileText => view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <path d="M14 2v6h6"/>
            <path d="M16 13H8"/>
            <path d="M16 17H8"/>
        }
        .into_any(),
        Icon::Filter => view! {
            <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
        }
        .into_any(),
        Icon::Landmark => view! {
            <path d="M3 22h18"/>
            <path d="M6 18v-7"/>
            <path d="M10 18v-7"/>
            <path d="M14 18v-7"/>
            <path d="M18 18v-7"/>
            <path d="m12 2 8 5H4z"/>
        }
        .into_any(),
        Icon::Package => view! {
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
            <path d="M3.27 6.96 12 12l8.73-5.04"/>
            <path d="M12 22V12"/>
        }
        .into_any(),
        Icon::PanelLeftClose => view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m16 15-3-3 3-3"/>
        }
        .into_any(),
        Icon::PanelLeftOpen => view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m14 9 3 3-3 3"/>
        }
        .into_any(),
        Icon::Pencil => view! {
            <path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>
        }
        .into_any(),
        Icon::PieChart => view! {
            <path d="M21.21 15.89A10 10 0 1 1 8 2.83"/>
            <path d="M22 12A10 10 0 0 0 12 2v10z"/>
        }
        .into_any(),
        Icon::Plus => view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }
        .into_any(),
        Icon::Receipt => view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16l4-2 4 2 4-2 4 2V8z"/>
            <path d="M14 2v6h6"/>
            <path d="M8 13h8"/>
            <path d="M8 17h5"/>
        }
        .into_any(),
        Icon::Save => view! {
            <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/>
            <polyline points="17 21 17 13 7 13 7 21"/>
            <polyline points="7 3 7 8 15 8"/>
        }
        .into_any(),
        Icon::ShieldCheck => view! {
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"/>
            <path d="m9 12 2 2 4-4"/>
        }
        .into_any(),
        Icon::Sparkles => view! {
            <path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"/>
        }
        .into_any(),
        Icon::Trash => view! {
            <path d="M3 6h18"/>
            <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/>
            <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>
        }
        .into_any(),
        Icon::Users => view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }
        .into_any(),
        Icon::Wallet => view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="M2 10h20"/>
            <path d="M16 15h2"/>
        }
        .into_any(),
    };

    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}
