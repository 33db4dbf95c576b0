//! Supplementary stylesheet injected into `<head>` at boot.
//!
//! These rules give the classes this crate toggles their visual effect. Page
//! themes may override any of them.

pub const ENHANCEMENT_CSS: &str = r"
.animate-in {
    animation: fadeInUp 0.8s ease-out forwards;
    opacity: 1 !important;
}

.ripple-effect {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple 0.6s linear;
    pointer-events: none;
}

@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.input-focused {
    transform: scale(1.02);
    transition: transform 0.3s ease;
}

.custom-tooltip {
    background: var(--glass-bg);
    backdrop-filter: var(--glass-blur);
    border: 1px solid var(--glass-border);
    color: var(--light-text);
    box-shadow: var(--glass-shadow);
}

.is-invalid {
    border-color: #ef4444 !important;
    box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1) !important;
}

.is-valid {
    border-color: #10b981 !important;
    box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.1) !important;
}
";

#[cfg(test)]
mod tests {
    use super::ENHANCEMENT_CSS;
    use crate::consts;

    #[test]
    fn stylesheet_covers_toggled_classes() {
        for class in [
            consts::REVEAL_CLASS,
            consts::RIPPLE_CLASS,
            consts::FOCUSED_CLASS,
            consts::INVALID_CLASS,
            consts::VALID_CLASS,
            "custom-tooltip",
        ] {
            assert!(ENHANCEMENT_CSS.contains(&format!(".{class} {{")), "missing rule for .{class}");
        }
    }

    #[test]
    fn braces_are_balanced() {
        let open = ENHANCEMENT_CSS.matches('{').count();
        let close = ENHANCEMENT_CSS.matches('}').count();
        assert_eq!(open, close);
    }
}
