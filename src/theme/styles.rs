//! Global CSS styles for the recycling guide.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* GREEN (Actions, recycling accents) */
  --leaf: #16a34a;
  --leaf-dark: #15803d;

  /* SURFACES */
  --paper: #ffffff;
  --stone: #6b7280;
  --overlay: rgba(0, 0, 0, 0.5);

  /* TEXT */
  --ink: #111827;
  --ink-muted: #4b5563;

  --font-sans: 'Pretendard', 'Noto Sans KR', system-ui, sans-serif;
  --radius: 0.5rem;
  --shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: #f0fdf4;
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Landing === */
.landing {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

.landing-header {
  position: relative;
  z-index: 10;
  text-align: center;
}

.page-title {
  font-size: 2.5rem;
  font-weight: 700;
}

.tagline {
  color: var(--ink-muted);
  margin: 0.75rem 0 2rem;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-plain, .btn-muted {
  font: inherit;
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary {
  background: var(--leaf);
  color: var(--paper);
  border: none;
  box-shadow: var(--shadow);
}

.btn-primary:hover { background: var(--leaf-dark); }

.btn-outline {
  background: transparent;
  color: var(--ink);
  border: 1px solid #d1d5db;
}

.btn-outline:hover { background: #f3f4f6; }

.btn-plain {
  background: var(--paper);
  color: #000;
  border: 1px solid #d1d5db;
  box-shadow: var(--shadow);
}

.btn-plain:hover { background: #d1d5db; }
.btn-plain:active { background: var(--stone); }

.btn-muted {
  background: var(--stone);
  color: var(--paper);
  border: none;
}

.is-disabled {
  cursor: not-allowed;
  opacity: 0.6;
}

.btn-enter { font-size: 1.125rem; padding: 0.75rem 1.5rem; }

.press-scale:hover { transform: scale(1.05); }
.press-scale:active { transform: scale(0.95); }

.mt-2 { margin-top: 0.5rem; }

.icon-btn {
  background: none;
  border: none;
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  color: var(--ink-muted);
}

/* === Guide Page === */
.guide-page {
  position: relative;
  min-height: 100vh;
}

.back-nav {
  position: absolute;
  top: 70px;
  left: 16rem;
  z-index: 999;
}

.guide-images {
  position: relative;
  z-index: 50;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding-top: 4rem;
}

.guide-image-section {
  position: relative;
  width: 100%;
  display: flex;
  justify-content: center;
}

.guide-image-wrap {
  width: 100%;
  max-width: 64rem;
}

.guide-image {
  display: block;
  width: 100%;
  height: auto;
}

/* === Control Cluster === */
.control-cluster {
  position: absolute;
  top: 90%;
  left: 47%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.scroll-hint {
  position: absolute;
  top: 100%;
  left: 45%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  cursor: pointer;
  font-size: 0.875rem;
  animation: hint-float 2s ease-in-out infinite;
}

.scroll-chevron {
  width: 1.5rem;
  height: 1.5rem;
  color: var(--paper);
  animation: bounce 1s infinite;
}

@keyframes hint-float {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 10px); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); }
  50% { transform: translateY(0); }
}

/* === Material Grid === */
.material-section {
  width: 100%;
  display: flex;
  justify-content: center;
}

.material-panel {
  width: 100%;
  max-width: 64rem;
  background: var(--paper);
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
  padding: 1.5rem;
  border-radius: var(--radius);
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1.5rem;
}

.material-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

@media (min-width: 768px) {
  .material-grid { grid-template-columns: repeat(3, 1fr); }
}

.card {
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  transition: transform var(--transition-fast);
}

.card:hover { transform: scale(1.05); }

.material-card {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  text-align: center;
}

.material-icon { width: 3rem; height: 3rem; }

.material-label { font-size: 1.125rem; font-weight: 600; }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
}

.modal-dialog {
  background: var(--paper);
  border-radius: var(--radius);
  width: min(90vw, 40rem);
  max-height: 90vh;
  overflow-y: auto;
  padding: 1.5rem;
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.modal-title { font-size: 1.25rem; font-weight: 700; }

.modal-image {
  width: 100%;
  height: auto;
  object-fit: cover;
  margin-bottom: 1rem;
  border-radius: var(--radius);
}

.modal-caption { color: var(--ink-muted); margin-bottom: 1rem; }

/* === Background Animation === */
.background-animation {
  position: fixed;
  opacity: 0.25;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}

.bubble {
  position: absolute;
  bottom: -150px;
  border-radius: 50%;
  background: radial-gradient(circle, #bbf7d0, transparent 70%);
  animation-name: drift;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

@keyframes drift {
  from { transform: translateY(0); }
  to { transform: translateY(-120vh); }
}
"#;
