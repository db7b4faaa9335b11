//! CSS for the landing page.
//!
//! Dark slate theme with cyan accents. Reveal animations are driven by inline
//! `opacity`/`transform` styles from the reveal hook; only mount-time and
//! overlay animations live here as keyframes.

/// Complete stylesheet, injected into the head by `PageHead`.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #020617;
    --bg-raised: rgba(15, 23, 42, 0.5);
    --glass: rgba(255, 255, 255, 0.05);
    --glass-strong: rgba(255, 255, 255, 0.1);
    --border: rgba(255, 255, 255, 0.1);
    --border-faint: rgba(255, 255, 255, 0.05);
    --text: #e2e8f0;
    --text-bright: #ffffff;
    --text-dim: #94a3b8;
    --text-muted: #64748b;
    --cyan: #22d3ee;
    --cyan-deep: #0891b2;
    --blue: #2563eb;
    --container-max: 1280px;
    --ease: cubic-bezier(0.22, 1, 0.36, 1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-geist-sans), ui-sans-serif, system-ui, sans-serif;
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: rgba(6, 182, 212, 0.3);
}

img {
    max-width: 100%;
}

button {
    font: inherit;
    cursor: pointer;
    background: none;
    border: none;
    color: inherit;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.container-narrow {
    max-width: 1024px;
}

/* ---------- Chrome ---------- */

.progress-bar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 4px;
    z-index: 100;
    transform-origin: left;
    transform: scaleX(0);
    background: linear-gradient(to right, var(--cyan-deep), var(--blue));
}

.logo {
    position: fixed;
    top: 24px;
    left: 24px;
    z-index: 50;
    cursor: pointer;
    opacity: 0;
    animation: enter-left 1s ease-out 0.8s forwards;
    transition: top 0.5s, left 0.5s;
}

.logo.compact {
    top: 16px;
    left: 16px;
}

.logo-frame {
    padding: 10px;
    border: 1px solid transparent;
    border-radius: 12px;
    transition: all 0.5s;
}

.logo-frame:hover {
    background: var(--glass-strong);
    border-color: rgba(255, 255, 255, 0.2);
}

.logo-frame.compact {
    padding: 8px;
}

.logo-img {
    display: block;
    width: 96px;
    filter: brightness(0) invert(1) drop-shadow(0 1px 3px rgba(255, 255, 255, 0.3));
    transition: width 0.5s;
}

.logo-img.compact {
    width: 80px;
}

.logo-wordmark {
    display: block;
    color: var(--text-bright);
    font-size: 15px;
    font-weight: 700;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    white-space: nowrap;
    transition: font-size 0.5s;
}

.logo-wordmark.compact {
    font-size: 13px;
}

.nav {
    display: none;
    position: fixed;
    top: 24px;
    left: 50%;
    z-index: 40;
    transform: translate(-50%, -120px);
    animation: nav-drop 1s ease 0.8s forwards;
}

.nav-pill {
    display: flex;
    align-items: center;
    gap: 40px;
    padding: 16px 32px;
    border-radius: 9999px;
    background: var(--glass-strong);
    border: 1px solid rgba(255, 255, 255, 0.3);
    backdrop-filter: blur(64px);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    transition: background 0.3s;
}

.nav-pill:hover {
    background: rgba(255, 255, 255, 0.2);
}

.nav.scrolled .nav-pill {
    padding: 12px 28px;
}

.nav-link {
    position: relative;
    color: var(--text-bright);
    font-size: 16px;
    font-weight: 500;
    letter-spacing: 0.05em;
    transition: color 0.2s;
}

.nav-link:hover {
    color: #67e8f9;
}

.nav-underline {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 0;
    height: 2px;
    background: var(--cyan);
    transition: width 0.3s;
}

.nav-link:hover .nav-underline {
    width: 100%;
}

.menu-button {
    position: fixed;
    top: 24px;
    right: 16px;
    z-index: 50;
    padding: 12px;
    border-radius: 9999px;
    color: var(--text-bright);
    background: rgba(255, 255, 255, 0.2);
    border: 1px solid rgba(255, 255, 255, 0.3);
    backdrop-filter: blur(24px);
    opacity: 0;
    animation: fade-in 0.4s ease 1s forwards;
}

.menu-overlay {
    position: fixed;
    inset: 0;
    z-index: 60;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 32px;
    padding: 40px;
    background: linear-gradient(135deg, rgba(22, 78, 99, 0.4), rgba(2, 6, 23, 0.4), rgba(15, 23, 42, 0.4));
    backdrop-filter: blur(40px);
    border-left: 1px solid var(--border);
}

.menu-overlay-enter > .menu-overlay {
    animation: menu-in 0.5s ease-in-out both;
}

.menu-overlay-exit > .menu-overlay {
    animation: menu-out 0.5s ease-in-out both;
}

.menu-close {
    position: absolute;
    top: 32px;
    right: 32px;
    padding: 12px;
    border-radius: 9999px;
    color: var(--text-bright);
    background: var(--glass);
    border: 1px solid var(--border);
}

.menu-links {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 24px;
}

.menu-link {
    font-size: 36px;
    font-weight: 700;
    letter-spacing: -0.05em;
    color: var(--text-bright);
    opacity: 0;
    animation: enter-up 0.4s ease-out forwards;
    transition: color 0.2s;
}

.menu-link:hover {
    color: var(--cyan);
}

.menu-footer {
    position: absolute;
    bottom: 48px;
    color: var(--text-muted);
    font-size: 12px;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    opacity: 0;
    animation: fade-in 0.4s ease 0.5s forwards;
}

@media (min-width: 768px) {
    .nav { display: flex; }
    .menu-button, .menu-overlay { display: none; }
}

/* ---------- Hero ---------- */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding-top: 80px;
    overflow: hidden;
}

.hero-backdrop,
.hero-glow,
.hero-texture {
    position: absolute;
    inset: 0;
}

.hero-glow {
    background: radial-gradient(circle at center, rgba(22, 78, 99, 0.2), var(--bg) 70%);
}

.hero-texture,
.contact-texture {
    opacity: 0.2;
    background-image: url('https://www.transparenttextures.com/patterns/carbon-fibre.png');
}

.hero-content {
    position: relative;
    z-index: 10;
    max-width: 1152px;
    text-align: center;
    animation: enter-up 0.8s ease-out both;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 32px;
    padding: 6px 16px;
    border-radius: 9999px;
    background: rgba(6, 182, 212, 0.1);
    border: 1px solid rgba(6, 182, 212, 0.3);
    color: var(--cyan);
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.3em;
    text-transform: uppercase;
}

.hero-badge-dot {
    width: 6px;
    height: 6px;
    border-radius: 9999px;
    background: var(--cyan);
    animation: pulse 2s ease-in-out infinite;
}

.hero-title {
    margin: 0 0 32px;
    color: var(--text-bright);
    font-size: clamp(48px, 9vw, 96px);
    font-weight: 700;
    line-height: 0.9;
    letter-spacing: -0.05em;
}

.hero-title-accent {
    background: linear-gradient(to right, var(--cyan), #3b82f6);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    max-width: 672px;
    margin: 0 auto 40px;
    color: var(--text-dim);
    font-size: 20px;
    font-weight: 300;
    line-height: 1.6;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 16px;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 16px 40px;
    border-radius: 9999px;
    font-weight: 700;
    transition: all 0.3s;
}

.btn-primary {
    background: var(--text-bright);
    color: var(--bg);
}

.btn-primary:hover {
    background: var(--cyan);
}

.btn-primary:hover .btn-chevron {
    transform: translateX(4px);
}

.btn-chevron {
    transition: transform 0.2s;
}

.btn-secondary {
    border: 1px solid rgba(255, 255, 255, 0.2);
}

.btn-secondary:hover {
    background: var(--glass);
}

.hero-scroll-hint {
    position: absolute;
    bottom: 40px;
    color: var(--text-muted);
    animation: bounce 1s infinite;
}

/* ---------- Sections ---------- */

.section {
    position: relative;
    padding: 128px 0;
}

.section-header {
    margin-bottom: 64px;
    text-align: center;
}

.section-title {
    margin: 0 0 16px;
    color: var(--text-bright);
    font-size: clamp(32px, 5vw, 48px);
    font-weight: 700;
    letter-spacing: -0.03em;
}

.section-eyebrow {
    margin: 0;
    color: var(--text-muted);
    font-size: 12px;
    font-weight: 700;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}

.section-description {
    max-width: 672px;
    margin: 0 auto;
    color: var(--text-dim);
    font-size: 18px;
    line-height: 1.7;
}

.section-description-italic {
    font-style: italic;
}

.card {
    padding: 32px;
    border-radius: 24px;
    background: var(--bg-raised);
    border: 1px solid var(--border-faint);
    transition: border-color 0.3s, background 0.3s, translate 0.3s;
}

.card:hover {
    border-color: rgba(6, 182, 212, 0.3);
    translate: 0 -10px;
}

.card-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 56px;
    height: 56px;
    margin-bottom: 24px;
    border-radius: 16px;
    background: var(--glass);
    transition: background 0.3s;
}

.card:hover .card-icon {
    background: rgba(6, 182, 212, 0.1);
}

.card-title {
    margin: 0 0 16px;
    color: var(--text-bright);
    font-size: 20px;
    font-weight: 700;
}

.card-description {
    margin: 0;
    color: var(--text-dim);
    font-weight: 300;
    line-height: 1.6;
}

.accent-cyan { color: var(--cyan); }
.accent-blue { color: #60a5fa; }
.accent-yellow { color: #facc15; }
.accent-purple { color: #c084fc; }
.accent-emerald { color: #34d399; }
.accent-orange { color: #fb923c; }

/* About */

.about-grid {
    display: grid;
    gap: 64px;
    align-items: center;
}

.about-title-accent {
    color: #06b6d4;
    font-style: italic;
}

.about-copy .section-description {
    margin: 0;
}

.stats {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 24px;
    padding-top: 40px;
}

.stat {
    padding-left: 16px;
    border-left: 2px solid #06b6d4;
}

.stat-value {
    color: var(--text-bright);
    font-size: 30px;
    font-weight: 700;
}

.stat-label {
    color: var(--text-muted);
    font-size: 14px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

.about-visual {
    position: relative;
}

.about-image {
    position: relative;
    aspect-ratio: 1;
    overflow: hidden;
    border-radius: 24px;
    border: 1px solid var(--border);
}

.about-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: grayscale(1);
    transition: all 0.7s;
}

.about-image:hover img {
    filter: grayscale(0);
    transform: scale(1.05);
}

.about-image-tint {
    position: absolute;
    inset: 0;
    background: rgba(22, 78, 99, 0.2);
    mix-blend-mode: overlay;
}

.about-badge {
    position: absolute;
    bottom: -24px;
    left: -24px;
    padding: 24px;
    border-radius: 16px;
    background: #0f172a;
    border: 1px solid var(--border);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.about-badge-title {
    margin: 8px 0 0;
    color: var(--text-bright);
    font-size: 14px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: -0.02em;
}

.about-badge-sub {
    margin: 0;
    color: var(--text-muted);
    font-size: 12px;
}

/* Vision, footprint, expertise grids */

.vision-grid,
.service-grid {
    display: grid;
    gap: 32px;
}

.expertise {
    background: rgba(15, 23, 42, 0.3);
}

.region-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 24px;
}

.region-card {
    text-align: center;
    background: var(--glass);
    border-color: var(--border);
    backdrop-filter: blur(12px);
}

.region-card:hover {
    background: rgba(6, 182, 212, 0.1);
    translate: 0 -5px;
}

.region-pin {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 56px;
    height: 56px;
    margin: 0 auto 24px;
    border-radius: 9999px;
    background: #0f172a;
    border: 1px solid var(--border-faint);
}

.region-name {
    margin: 0;
    color: var(--text-bright);
    font-size: 14px;
    font-weight: 700;
    letter-spacing: 0.05em;
}

/* Clients */

.clients-header {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: flex-end;
    gap: 24px;
    margin-bottom: 64px;
}

.clients-established {
    padding: 8px 16px;
    border-radius: 9999px;
    background: rgba(6, 182, 212, 0.05);
    border: 1px solid rgba(6, 182, 212, 0.1);
    color: #06b6d4;
    font-family: var(--font-geist-mono), ui-monospace, monospace;
    font-size: 14px;
    letter-spacing: 0.1em;
}

.client-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

.client-card {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    height: 128px;
    padding: 32px;
    overflow: hidden;
    border-radius: 16px;
    background: var(--glass);
    border: 1px solid var(--border-faint);
}

.client-card:hover {
    background: var(--text-bright);
    border-color: var(--text-bright);
}

.client-logo {
    max-height: 48px;
    width: auto;
    object-fit: contain;
    filter: grayscale(1);
    opacity: 0.6;
    transition: all 0.5s;
}

.client-card:hover .client-logo {
    filter: grayscale(0);
    opacity: 1;
    transform: scale(1.1);
}

.client-name {
    display: none;
    color: var(--text-dim);
    font-size: 14px;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-align: center;
    text-transform: uppercase;
}

.client-name.visible {
    display: block;
}

.client-card:hover .client-name {
    color: #0f172a;
}

/* Contact */

.contact-panel {
    position: relative;
    overflow: hidden;
    padding: 80px 48px;
    border-radius: 48px;
    text-align: center;
    color: var(--text-bright);
    background: linear-gradient(135deg, var(--cyan-deep), #1d4ed8);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.contact-texture {
    position: absolute;
    inset: 0;
    opacity: 0.1;
}

.contact-title {
    position: relative;
    margin: 0 0 32px;
    font-size: clamp(36px, 6vw, 60px);
    font-weight: 700;
    letter-spacing: -0.05em;
}

.contact-description {
    position: relative;
    max-width: 576px;
    margin: 0 auto 48px;
    color: rgba(255, 255, 255, 0.8);
    font-size: 18px;
    font-weight: 300;
}

.contact-actions {
    position: relative;
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    align-items: center;
    gap: 24px;
}

.contact-pill {
    display: inline-flex;
    align-items: center;
    gap: 12px;
    padding: 16px 32px;
    border-radius: 9999px;
    font-weight: 700;
    background: var(--glass-strong);
    border: 1px solid rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(12px);
}

.contact-pill-dark {
    background: var(--bg);
    border-color: transparent;
    transition: transform 0.2s;
}

.contact-pill-dark:hover {
    transform: scale(1.05);
}

/* Footer */

.footer {
    padding: 48px 0;
    border-top: 1px solid var(--border-faint);
}

.footer-inner {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: 24px;
}

.footer-brand {
    color: var(--text-bright);
    font-size: 14px;
    font-weight: 700;
    letter-spacing: 0.1em;
}

.footer-copyright {
    margin: 0;
    color: var(--text-muted);
    font-size: 14px;
}

.footer-links {
    display: flex;
    gap: 24px;
}

.footer-link {
    color: var(--text-muted);
    font-size: 12px;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    transition: color 0.2s;
}

.footer-link:hover {
    color: var(--text-bright);
}

@media (min-width: 768px) {
    .service-grid, .vision-grid { grid-template-columns: repeat(2, 1fr); }
    .client-grid { grid-template-columns: repeat(4, 1fr); }
    .contact-panel { padding: 80px; }
}

@media (min-width: 1024px) {
    .about-grid { grid-template-columns: repeat(2, 1fr); }
    .service-grid, .vision-grid { grid-template-columns: repeat(3, 1fr); }
    .region-grid { grid-template-columns: repeat(5, 1fr); }
}

/* ---------- Keyframes ---------- */

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes enter-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: none; }
}

@keyframes enter-left {
    from { opacity: 0; transform: translateX(-50px); }
    to { opacity: 1; transform: none; }
}

@keyframes nav-drop {
    to { transform: translate(-50%, 0); }
}

@keyframes menu-in {
    from { opacity: 0; transform: translateX(100%); }
    to { opacity: 1; transform: none; }
}

@keyframes menu-out {
    from { opacity: 1; transform: none; }
    to { opacity: 0; transform: translateX(100%); }
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

@keyframes bounce {
    0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
    50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation-duration: 0.01ms !important;
        transition-duration: 0.01ms !important;
    }
}
"#;
