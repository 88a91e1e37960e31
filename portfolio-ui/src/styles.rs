#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-portfolio-ui]";

/// CSS mặc định của trang, token đặt ở root để dễ ghi đè theme.
pub const DEFAULT_STYLES: &str = r#"
.portfolio-root {
  --portfolio-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --portfolio-bg: #ffffff;
  --portfolio-surface: #f8fafc;
  --portfolio-card-bg: #ffffff;
  --portfolio-card-border: rgba(148, 163, 184, 0.28);
  --portfolio-text: #1f2933;
  --portfolio-muted: #52606d;
  --portfolio-heading: #11181c;
  --portfolio-accent: #2563eb;
  --portfolio-accent-alt: #7c3aed;
  --portfolio-accent-gradient: linear-gradient(90deg, #2563eb, #7c3aed);
  --portfolio-accent-gradient-flip: linear-gradient(90deg, #7c3aed, #2563eb);
  --portfolio-track-bg: #e2e8f0;
  --portfolio-radius: 14px;
  --portfolio-shadow: 0 18px 40px rgba(15, 23, 42, 0.12);

  font-family: var(--portfolio-font-family);
  background: var(--portfolio-bg);
  color: var(--portfolio-text);
  min-height: 100vh;
  transition: background 0.3s ease, color 0.3s ease;
}

.portfolio-root[data-theme="dark"] {
  --portfolio-bg: #111827;
  --portfolio-surface: #1f2937;
  --portfolio-card-bg: #1f2937;
  --portfolio-card-border: rgba(71, 85, 105, 0.6);
  --portfolio-text: #d1d5db;
  --portfolio-muted: #9ca3af;
  --portfolio-heading: #f9fafb;
  --portfolio-track-bg: #374151;
}

.portfolio-header {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 50;
  backdrop-filter: blur(6px);
  background: color-mix(in srgb, var(--portfolio-bg) 90%, transparent);
  border-bottom: 1px solid var(--portfolio-card-border);
}

.portfolio-header-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: 14px 20px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 16px;
}

.portfolio-mark {
  font-size: 1.6rem;
  font-weight: 800;
  letter-spacing: -0.02em;
  background: var(--portfolio-accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  user-select: none;
}

.portfolio-nav {
  display: flex;
  gap: 22px;
}

.portfolio-nav a {
  color: var(--portfolio-muted);
  text-decoration: none;
  font-size: 0.95rem;
}

.portfolio-nav a:hover {
  color: var(--portfolio-accent);
}

.portfolio-header-actions {
  display: flex;
  align-items: center;
  gap: 10px;
}

.portfolio-icon-button {
  border: none;
  border-radius: 10px;
  padding: 8px 10px;
  cursor: pointer;
  background: var(--portfolio-surface);
  color: var(--portfolio-muted);
  font-size: 1rem;
}

.portfolio-menu-button {
  display: none;
}

.portfolio-mobile-nav {
  display: flex;
  flex-direction: column;
  gap: 12px;
  padding: 14px 20px;
  border-top: 1px solid var(--portfolio-card-border);
}

.portfolio-mobile-nav a {
  color: var(--portfolio-muted);
  text-decoration: none;
}

.portfolio-section {
  padding: 80px 20px;
}

.portfolio-section.is-alt {
  background: var(--portfolio-surface);
}

.portfolio-section-inner {
  max-width: 1100px;
  margin: 0 auto;
}

.portfolio-section-title {
  font-size: 2.2rem;
  font-weight: 700;
  text-align: center;
  color: var(--portfolio-heading);
  margin: 0 0 48px;
}

.portfolio-hero {
  padding-top: 130px;
  display: grid;
  grid-template-columns: 1.1fr 0.9fr;
  gap: 40px;
  align-items: center;
  max-width: 1100px;
  margin: 0 auto;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  border-radius: 999px;
  padding: 5px 12px;
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--portfolio-accent);
  background: rgba(37, 99, 235, 0.1);
  border: 1px solid rgba(37, 99, 235, 0.3);
}

.hero-badge::before {
  content: "";
  width: 8px;
  height: 8px;
  border-radius: 999px;
  background: #34d399;
}

.hero-headline {
  margin: 18px 0 0;
  font-size: clamp(2.6rem, 6vw, 4.2rem);
  font-weight: 800;
  line-height: 0.95;
  letter-spacing: -0.03em;
  color: var(--portfolio-heading);
}

.hero-headline span {
  display: block;
}

.hero-headline .is-gradient {
  background: var(--portfolio-accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-blurb {
  margin-top: 20px;
  max-width: 520px;
  font-size: 1.05rem;
  line-height: 1.6;
  color: var(--portfolio-muted);
}

.hero-stage {
  position: relative;
  min-height: 420px;
}

.hero-card {
  position: absolute;
  border-radius: 16px;
  border: 1px solid var(--portfolio-card-border);
  background: color-mix(in srgb, var(--portfolio-card-bg) 85%, transparent);
  box-shadow: var(--portfolio-shadow);
  padding: 14px;
}

.hero-card.is-profile {
  top: -10px;
  left: 0;
  width: 230px;
  animation: hero-float-a 2.2s ease-in-out infinite alternate;
}

.hero-card.is-profile img {
  width: 100%;
  height: 110px;
  object-fit: cover;
  border-radius: 10px;
  margin-top: 10px;
}

.hero-card-name {
  font-weight: 600;
  font-size: 0.9rem;
  color: var(--portfolio-heading);
  margin: 0;
}

.hero-card-location {
  font-size: 0.72rem;
  color: var(--portfolio-muted);
  margin: 2px 0 0;
}

.hero-card.is-brands {
  bottom: -20px;
  left: 0;
  right: 40px;
  background: var(--portfolio-accent-gradient);
  color: #ffffff;
  border: none;
  font-size: 0.8rem;
  animation: hero-float-b 2.6s ease-in-out infinite alternate;
  animation-delay: 0.2s;
}

.hero-brand-row {
  margin-top: 8px;
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.hero-brand-pill {
  padding: 3px 10px;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.18);
  white-space: nowrap;
}

.hero-card.is-socials {
  top: -30px;
  right: -10px;
  display: grid;
  grid-template-columns: repeat(2, auto);
  gap: 8px;
  animation: hero-float-c 2s ease-in-out infinite alternate;
  animation-delay: 0.1s;
}

.hero-social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 34px;
  height: 34px;
  border-radius: 999px;
  background: var(--portfolio-surface);
  color: var(--portfolio-accent);
  font-size: 0.72rem;
  font-weight: 700;
  text-decoration: none;
}

.hero-photo {
  margin-left: auto;
  margin-right: 30px;
  width: 270px;
  height: 260px;
  border-radius: 18px;
  overflow: hidden;
  box-shadow: var(--portfolio-shadow);
  border: 1px solid var(--portfolio-card-border);
}

.hero-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

@keyframes hero-float-a {
  to { transform: translateY(-8px); }
}

@keyframes hero-float-b {
  to { transform: translateY(-10px); }
}

@keyframes hero-float-c {
  to { transform: translateY(-7px); }
}

.about-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 40px;
  align-items: start;
}

.about-bio {
  font-size: 1.02rem;
  line-height: 1.65;
  color: var(--portfolio-muted);
}

.about-fact-label {
  font-weight: 600;
  color: var(--portfolio-heading);
  margin: 16px 0 2px;
}

.about-fact-value {
  color: var(--portfolio-muted);
  margin: 0;
}

.about-column-title {
  font-size: 1.4rem;
  font-weight: 700;
  color: var(--portfolio-heading);
  margin: 0 0 20px;
}

.progress-row {
  margin-bottom: 16px;
}

.progress-labels {
  display: flex;
  justify-content: space-between;
  margin-bottom: 7px;
}

.progress-name {
  font-weight: 500;
  color: var(--portfolio-text);
}

.progress-level {
  font-size: 0.85rem;
  color: var(--portfolio-muted);
}

.progress-track {
  width: 100%;
  height: 8px;
  border-radius: 999px;
  overflow: hidden;
  background: var(--portfolio-track-bg);
}

.progress-fill {
  height: 100%;
  border-radius: 999px;
  background: var(--portfolio-accent-gradient);
  transition: width 0.7s ease-out;
}

.progress-fill.is-flipped {
  background: var(--portfolio-accent-gradient-flip);
}

.marquee-viewport {
  width: 100%;
  overflow: hidden;
}

.marquee-strip {
  display: flex;
  gap: 24px;
  padding: 0 24px;
  will-change: transform;
}

.marquee-card {
  display: flex;
  flex-direction: column;
  text-decoration: none;
}

.marquee-card-frame {
  position: relative;
  min-width: 320px;
  height: 240px;
  border-radius: 14px;
  overflow: hidden;
  border: 1px solid var(--portfolio-card-border);
  background: var(--portfolio-surface);
  cursor: pointer;
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.marquee-card-frame:hover {
  transform: translateY(-4px);
  box-shadow: var(--portfolio-shadow);
}

.marquee-card-frame img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.marquee-card-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 10px;
  padding: 16px;
  background: rgba(0, 0, 0, 0.8);
  color: #ffffff;
  font-size: 0.88rem;
  opacity: 0;
  transition: opacity 0.3s ease;
}

.marquee-card-frame:hover .marquee-card-overlay {
  opacity: 1;
}

.marquee-tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
}

.marquee-tag {
  padding: 2px 9px;
  border-radius: 999px;
  font-size: 0.72rem;
  background: var(--portfolio-accent-gradient);
  color: #ffffff;
}

.marquee-card-title {
  margin: 12px 0 0;
  font-size: 1.05rem;
  font-weight: 600;
  color: var(--portfolio-heading);
}

.timeline-track {
  position: relative;
  max-width: 720px;
  margin: 0 auto;
}

.timeline-traveler {
  position: absolute;
  left: 0;
  transform: translateX(-50%);
  z-index: 10;
  width: 32px;
  height: 32px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 999px;
  background: var(--portfolio-accent-gradient);
  color: #ffffff;
  font-size: 1rem;
  box-shadow: var(--portfolio-shadow);
}

.timeline-entry {
  position: relative;
  padding-left: 34px;
  padding-bottom: 48px;
}

.timeline-entry:not(:last-child) {
  border-left: 2px dashed var(--portfolio-accent);
}

.timeline-entry.is-alt:not(:last-child) {
  border-left-color: var(--portfolio-accent-alt);
}

.timeline-dot {
  position: absolute;
  left: 0;
  transform: translateX(-50%);
  width: 16px;
  height: 16px;
  border-radius: 999px;
  background: var(--portfolio-accent-gradient);
}

.timeline-entry.is-alt .timeline-dot {
  background: var(--portfolio-accent-gradient-flip);
}

.timeline-card {
  margin-left: 14px;
  border-radius: 12px;
  padding: 22px;
  background: var(--portfolio-card-bg);
  box-shadow: var(--portfolio-shadow);
}

.timeline-heading {
  margin: 0;
  font-size: 1.2rem;
  font-weight: 700;
  color: var(--portfolio-heading);
}

.timeline-subheading {
  margin: 4px 0 0;
  font-weight: 600;
  color: var(--portfolio-accent);
}

.timeline-entry.is-alt .timeline-subheading {
  color: var(--portfolio-accent-alt);
}

.timeline-period {
  margin: 8px 0 0;
  font-size: 0.85rem;
  color: var(--portfolio-muted);
}

.timeline-detail {
  margin: 10px 0 0;
  color: var(--portfolio-muted);
  line-height: 1.55;
}

.contact-blurb {
  max-width: 620px;
  margin: 0 auto 32px;
  text-align: center;
  font-size: 1.05rem;
  line-height: 1.6;
  color: var(--portfolio-muted);
}

.contact-actions {
  display: flex;
  justify-content: center;
}

.contact-email {
  display: inline-flex;
  align-items: center;
  gap: 10px;
  padding: 14px 28px;
  border-radius: 12px;
  background: var(--portfolio-surface);
  color: var(--portfolio-heading);
  text-decoration: none;
  transition: background 0.3s ease, color 0.3s ease, transform 0.3s ease;
}

.contact-email:hover {
  background: var(--portfolio-accent);
  color: #ffffff;
  transform: translateY(-3px);
}

.contact-social-row {
  margin-top: 36px;
  display: flex;
  justify-content: center;
  gap: 24px;
}

.contact-social-row a {
  color: var(--portfolio-muted);
  text-decoration: none;
}

.contact-social-row a:hover {
  color: var(--portfolio-accent);
}

.chat-toggle {
  position: fixed;
  bottom: 24px;
  right: 24px;
  z-index: 60;
  width: 58px;
  height: 58px;
  border: none;
  border-radius: 999px;
  background: var(--portfolio-accent-gradient);
  color: #ffffff;
  font-size: 1.4rem;
  cursor: pointer;
  box-shadow: var(--portfolio-shadow);
  transition: transform 0.3s ease;
}

.chat-toggle:hover {
  transform: scale(1.08);
}

.chat-window {
  position: fixed;
  bottom: 96px;
  right: 24px;
  z-index: 60;
  width: min(92vw, 360px);
  height: 420px;
  display: flex;
  flex-direction: column;
  border-radius: 18px;
  overflow: hidden;
  background: var(--portfolio-card-bg);
  box-shadow: var(--portfolio-shadow);
}

.chat-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 14px 16px;
  background: var(--portfolio-accent-gradient);
  color: #ffffff;
}

.chat-header h3 {
  margin: 0;
  font-size: 1.05rem;
}

.chat-close {
  border: none;
  background: none;
  color: #ffffff;
  font-size: 1.1rem;
  cursor: pointer;
}

.chat-log {
  flex: 1;
  overflow-y: auto;
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.chat-row {
  display: flex;
  justify-content: flex-start;
}

.chat-row.is-visitor {
  justify-content: flex-end;
}

.chat-bubble {
  max-width: 80%;
  padding: 10px 12px;
  border-radius: 12px;
  font-size: 0.88rem;
  line-height: 1.45;
  background: var(--portfolio-surface);
  color: var(--portfolio-text);
}

.chat-row.is-visitor .chat-bubble {
  background: var(--portfolio-accent);
  color: #ffffff;
}

.chat-typing {
  font-size: 0.8rem;
  color: var(--portfolio-muted);
  font-style: italic;
}

.chat-input-row {
  display: flex;
  gap: 8px;
  padding: 14px;
  border-top: 1px solid var(--portfolio-card-border);
}

.chat-input-row input {
  flex: 1;
  padding: 9px 12px;
  border-radius: 10px;
  border: 1px solid var(--portfolio-card-border);
  background: var(--portfolio-bg);
  color: var(--portfolio-text);
  font-size: 0.9rem;
}

.chat-input-row input:focus {
  outline: 2px solid var(--portfolio-accent);
}

.chat-send {
  border: none;
  border-radius: 10px;
  padding: 9px 14px;
  cursor: pointer;
  background: var(--portfolio-accent-gradient);
  color: #ffffff;
}

.portfolio-footer {
  padding: 28px 20px;
  border-top: 1px solid var(--portfolio-card-border);
  text-align: center;
  color: var(--portfolio-muted);
  background: var(--portfolio-surface);
}

@media (max-width: 900px) {
  .portfolio-nav {
    display: none;
  }

  .portfolio-menu-button {
    display: inline-flex;
  }

  .portfolio-hero {
    grid-template-columns: 1fr;
    padding-top: 110px;
  }

  .hero-stage {
    min-height: 380px;
    margin-top: 30px;
  }

  .about-grid {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 640px) {
  .portfolio-section {
    padding: 56px 16px;
  }

  .marquee-card-frame {
    min-width: 270px;
    height: 210px;
  }

  .hero-photo {
    width: 200px;
    height: 210px;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-portfolio-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
