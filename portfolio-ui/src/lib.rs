//! Thành phần giao diện trang portfolio cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::styles;
    use chrono::{Datelike, Utc};
    use portfolio_assistant::{greeting, respond, ChatKnowledge};
    use portfolio_core::{
        duplicate_for_loop, section_progress, ChatMessage, ChatRole, Education, Experience,
        MarqueeState, PortfolioConfig, Profile, Project, RevealState, Transcript, TravelerTrack,
    };
    use serde::Deserialize;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        console, Document, Element, HtmlElement, HtmlInputElement, IntersectionObserver,
        IntersectionObserverEntry, IntersectionObserverInit, ResizeObserver, Window,
    };
    use yew::events::{InputEvent, KeyboardEvent, MouseEvent, TouchEvent};
    use yew::prelude::*;
    use yew::TargetCast;

    /// Delta giả định khi frame đầu tiên chưa có mốc thời gian trước đó.
    const FRAME_FALLBACK_MS: f64 = 16.7;
    /// Đo lại dải trượt sau mốc này để ảnh nạp muộn kịp tính vào chiều rộng.
    const LATE_MEASURE_DELAY_MS: i32 = 300;

    const NAV_SECTIONS: &[(&str, &str)] = &[
        ("Home", "#home"),
        ("About", "#about"),
        ("Projects", "#projects"),
        ("Experience", "#experience"),
        ("Education", "#education"),
        ("Contact", "#contact"),
    ];

    #[derive(Properties, PartialEq)]
    pub struct PortfolioAppProps {
        pub profile: Profile,
        #[prop_or_default]
        pub config: PortfolioConfig,
    }

    #[function_component(PortfolioApp)]
    fn portfolio_app(props: &PortfolioAppProps) -> Html {
        let profile = &props.profile;
        let config = props.config.clone();

        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let dark_mode = use_state(|| false);
        let menu_open = use_state(|| false);

        let knowledge = use_memo(profile.clone(), |profile| {
            ChatKnowledge::from_profile(profile)
        });

        let on_toggle_theme = {
            let dark_mode = dark_mode.clone();
            Callback::from(move |_: MouseEvent| dark_mode.set(!*dark_mode))
        };
        let on_toggle_menu = {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
        };

        let experience_entries: Vec<TimelineEntry> = profile
            .experience
            .iter()
            .map(TimelineEntry::from_experience)
            .collect();
        let education_entries: Vec<TimelineEntry> = profile
            .education
            .iter()
            .map(TimelineEntry::from_education)
            .collect();

        let theme = if *dark_mode { "dark" } else { "light" };

        html! {
            <div class="portfolio-root" data-theme={theme}>
                <header class="portfolio-header">
                    <div class="portfolio-header-inner">
                        <span class="portfolio-mark">{ monogram(&profile.name) }</span>
                        { render_nav("portfolio-nav") }
                        <div class="portfolio-header-actions">
                            <button
                                class="portfolio-icon-button"
                                onclick={on_toggle_theme}
                                aria-label="Toggle theme"
                            >
                                { if *dark_mode { "☀" } else { "☾" } }
                            </button>
                            <button
                                class={classes!("portfolio-icon-button", "portfolio-menu-button")}
                                onclick={on_toggle_menu}
                                aria-label="Toggle menu"
                            >
                                { if *menu_open { "✕" } else { "☰" } }
                            </button>
                        </div>
                    </div>
                    if *menu_open {
                        { render_nav("portfolio-mobile-nav") }
                    }
                </header>

                <section id="home">
                    <Hero profile={profile.clone()} />
                </section>

                <AboutSection profile={profile.clone()} config={config.clone()} />

                <section id="projects" class="portfolio-section">
                    <h2 class="portfolio-section-title">{"Featured Projects"}</h2>
                    <ProjectMarquee projects={profile.projects.clone()} config={config.clone()} />
                </section>

                <TimelineSection
                    id="experience"
                    title="Experience"
                    icon="✈"
                    entries={experience_entries}
                    config={config.clone()}
                />
                <TimelineSection
                    id="education"
                    title="Education"
                    icon="🎓"
                    entries={education_entries}
                    config={config.clone()}
                    alt={true}
                />

                { render_contact(profile) }

                <ChatWidget knowledge={knowledge} config={config} />

                <footer class="portfolio-footer">
                    <p>{ format!("© {} {}", Utc::now().year(), profile.name) }</p>
                </footer>
            </div>
        }
    }

    fn render_nav(class: &'static str) -> Html {
        html! {
            <nav class={class}>
                {
                    for NAV_SECTIONS.iter().map(|(label, anchor)| html! {
                        <a key={*label} href={*anchor}>{ *label }</a>
                    })
                }
            </nav>
        }
    }

    /// Chữ lồng hiển thị ở góc header, ghép từ chữ cái đầu của tên.
    fn monogram(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }

    #[derive(Properties, PartialEq)]
    struct HeroProps {
        profile: Profile,
    }

    #[function_component(Hero)]
    fn hero(props: &HeroProps) -> Html {
        let profile = &props.profile;
        html! {
            <div class="portfolio-hero">
                <div>
                    <span class="hero-badge">{"Available for new opportunities"}</span>
                    <h1 class="hero-headline">
                        <span>{"Hi, I'm"}</span>
                        <span>{ profile.name.clone() }</span>
                        <span class="is-gradient">{ profile.title.clone() }</span>
                    </h1>
                    <p class="hero-blurb">{ profile.bio.clone() }</p>
                </div>
                <div class="hero-stage">
                    <div class="hero-card is-profile">
                        <p class="hero-card-name">{ profile.name.clone() }</p>
                        <p class="hero-card-location">{ profile.location.clone() }</p>
                        if !profile.avatar.is_empty() {
                            <img src={profile.avatar.clone()} alt="Preview" loading="lazy" />
                        }
                    </div>
                    <div class="hero-photo">
                        if !profile.avatar.is_empty() {
                            <img src={profile.avatar.clone()} alt="Profile" loading="eager" />
                        }
                    </div>
                    if !profile.brands.is_empty() {
                        <div class="hero-card is-brands">
                            <p>{"The most recent projects I happily worked with ✨"}</p>
                            <div class="hero-brand-row">
                                {
                                    for profile.brands.iter().map(|brand| html! {
                                        <span key={brand.name.clone()} class="hero-brand-pill">
                                            { brand.name.clone() }
                                        </span>
                                    })
                                }
                            </div>
                        </div>
                    }
                    <div class="hero-card is-socials">
                        { render_social_chip(profile.socials.linkedin.clone(), "in", "LinkedIn") }
                        { render_social_chip(profile.socials.github.clone(), "gh", "GitHub") }
                        { render_social_chip(profile.socials.instagram.clone(), "ig", "Instagram") }
                        {
                            render_social_chip(
                                profile.socials.email.as_ref().map(|email| format!("mailto:{email}")),
                                "@",
                                "Email",
                            )
                        }
                    </div>
                </div>
            </div>
        }
    }

    fn render_social_chip(href: Option<String>, short: &'static str, label: &'static str) -> Html {
        match href {
            Some(url) => html! {
                <a
                    class="hero-social-link"
                    href={url}
                    target="_blank"
                    rel="noreferrer"
                    aria-label={label}
                    title={label}
                >
                    { short }
                </a>
            },
            None => html! {},
        }
    }

    #[derive(Properties, PartialEq)]
    struct AboutProps {
        profile: Profile,
        config: PortfolioConfig,
    }

    #[function_component(AboutSection)]
    fn about_section(props: &AboutProps) -> Html {
        let profile = &props.profile;
        let config = &props.config;
        html! {
            <section id="about" class="portfolio-section is-alt">
                <div class="portfolio-section-inner">
                    <h2 class="portfolio-section-title">{"About Me"}</h2>
                    <div class="about-grid">
                        <div>
                            <p class="about-bio">{ profile.bio.clone() }</p>
                            if !profile.location.is_empty() {
                                <>
                                    <p class="about-fact-label">{"Location"}</p>
                                    <p class="about-fact-value">{ profile.location.clone() }</p>
                                </>
                            }
                            if !profile.phone.is_empty() {
                                <>
                                    <p class="about-fact-label">{"Phone"}</p>
                                    <p class="about-fact-value">{ profile.phone.clone() }</p>
                                </>
                            }
                        </div>
                        <div>
                            <h3 class="about-column-title">{"Skills"}</h3>
                            {
                                for profile.skills.iter().map(|skill| html! {
                                    <ProgressBar
                                        key={skill.name.clone()}
                                        label={skill.name.clone()}
                                        level={skill.level}
                                        threshold={config.reveal_threshold}
                                        reset_on_exit={config.reveal_reset_on_exit}
                                    />
                                })
                            }
                        </div>
                        <div>
                            <h3 class="about-column-title">{"Tools & Frameworks"}</h3>
                            {
                                for profile.tools.iter().map(|tool| html! {
                                    <ProgressBar
                                        key={tool.name.clone()}
                                        label={tool.name.clone()}
                                        level={tool.level}
                                        threshold={config.reveal_threshold}
                                        reset_on_exit={config.reveal_reset_on_exit}
                                        flipped={true}
                                    />
                                })
                            }
                        </div>
                    </div>
                </div>
            </section>
        }
    }

    #[derive(Properties, PartialEq)]
    struct ProgressBarProps {
        label: AttrValue,
        level: u8,
        threshold: f64,
        reset_on_exit: bool,
        #[prop_or_default]
        flipped: bool,
    }

    /// Thanh kỹ năng: quan sát giao cắt viewport rồi kéo fill từ 0 lên mức
    /// thành thạo; CSS lo phần chuyển động.
    #[function_component(ProgressBar)]
    fn progress_bar(props: &ProgressBarProps) -> Html {
        let node = use_node_ref();
        let reveal = use_mut_ref(|| RevealState::new(true));
        let fill = use_state(|| 0u8);

        {
            let node = node.clone();
            let reveal = reveal.clone();
            let fill = fill.clone();
            use_effect_with(
                (props.reset_on_exit, props.threshold, props.level),
                move |(reset_on_exit, threshold, level)| {
                    *reveal.borrow_mut() = RevealState::new(*reset_on_exit);
                    let level = *level;

                    let callback = {
                        let reveal = reveal.clone();
                        let fill = fill.clone();
                        Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                            if let Ok(entry) =
                                entries.get(0).dyn_into::<IntersectionObserverEntry>()
                            {
                                let mut state = reveal.borrow_mut();
                                if state.observe(entry.is_intersecting()) {
                                    fill.set(state.fill_percent(level));
                                }
                            }
                        })
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(*threshold));
                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .ok();

                    if let (Some(observer), Some(element)) =
                        (observer.as_ref(), node.cast::<Element>())
                    {
                        observer.observe(&element);
                    }

                    move || {
                        if let Some(observer) = observer {
                            observer.disconnect();
                        }
                        drop(callback);
                    }
                },
            );
        }

        html! {
            <div ref={node} class="progress-row">
                <div class="progress-labels">
                    <span class="progress-name">{ props.label.clone() }</span>
                    <span class="progress-level">{ format!("{}%", props.level) }</span>
                </div>
                <div class="progress-track">
                    <div
                        class={classes!("progress-fill", props.flipped.then_some("is-flipped"))}
                        style={format!("width: {}%", *fill)}
                    />
                </div>
            </div>
        }
    }

    #[derive(Properties, PartialEq)]
    struct ProjectMarqueeProps {
        projects: Vec<Project>,
        config: PortfolioConfig,
    }

    /// Dải dự án trượt ngang vô hạn: hai bản sao nội dung, offset do
    /// `MarqueeState` sở hữu, mỗi frame ghi transform trực tiếp vào style.
    #[function_component(ProjectMarquee)]
    fn project_marquee(props: &ProjectMarqueeProps) -> Html {
        let viewport = use_node_ref();
        let strip = use_node_ref();
        let marquee = use_mut_ref(|| MarqueeState::new(props.config.marquee_speed_px_per_sec));

        // Chỉ chạy khi dải nằm trong viewport.
        {
            let viewport = viewport.clone();
            let marquee = marquee.clone();
            use_effect_with(props.config.marquee_view_threshold, move |threshold| {
                let callback = {
                    let marquee = marquee.clone();
                    Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                        if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                            marquee.borrow_mut().set_in_view(entry.is_intersecting());
                        }
                    })
                };

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(*threshold));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), viewport.cast::<Element>())
                {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            });
        }

        // Đo nửa chiều rộng lúc mount, khi resize, và một lần sau khi ảnh kịp nạp.
        {
            let strip = strip.clone();
            let marquee = marquee.clone();
            use_effect_with(props.projects.len(), move |_| {
                measure_half_width(&strip, &marquee);

                let on_resize = {
                    let strip = strip.clone();
                    let marquee = marquee.clone();
                    Closure::<dyn FnMut()>::new(move || measure_half_width(&strip, &marquee))
                };
                let late_measure = {
                    let strip = strip.clone();
                    let marquee = marquee.clone();
                    Closure::<dyn FnMut()>::new(move || measure_half_width(&strip, &marquee))
                };

                let window = web_sys::window();
                if let Some(window) = window.as_ref() {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }
                let timeout_id = window.as_ref().and_then(|window| {
                    window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            late_measure.as_ref().unchecked_ref(),
                            LATE_MEASURE_DELAY_MS,
                        )
                        .ok()
                });

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                        if let Some(id) = timeout_id {
                            window.clear_timeout_with_handle(id);
                        }
                    }
                    drop(on_resize);
                    drop(late_measure);
                }
            });
        }

        // Vòng lặp animation-frame tự gọi lại chính nó cho tới khi unmount.
        {
            let strip = strip.clone();
            let marquee = marquee.clone();
            use_effect_with((), move |_| {
                let frame_id = Rc::new(Cell::new(0i32));
                let last_tick = Rc::new(Cell::new(0.0f64));
                let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));

                {
                    let frame_id = frame_id.clone();
                    let last_tick = last_tick.clone();
                    let handle_inner = handle.clone();
                    *handle.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                        let elapsed = if last_tick.get() > 0.0 {
                            timestamp - last_tick.get()
                        } else {
                            FRAME_FALLBACK_MS
                        };
                        last_tick.set(timestamp);

                        if let Some(element) = strip.cast::<HtmlElement>() {
                            let mut state = marquee.borrow_mut();
                            state.advance(elapsed);
                            let _ = element.style().set_property(
                                "transform",
                                &format!("translateX({}px)", state.translate()),
                            );
                        }

                        if let Some(window) = web_sys::window() {
                            let handle_ref = handle_inner.borrow();
                            if let Some(callback) = handle_ref.as_ref() {
                                if let Ok(id) = window
                                    .request_animation_frame(callback.as_ref().unchecked_ref())
                                {
                                    frame_id.set(id);
                                }
                            }
                        }
                    }));
                }

                if let Some(window) = web_sys::window() {
                    let handle_ref = handle.borrow();
                    if let Some(callback) = handle_ref.as_ref() {
                        if let Ok(id) =
                            window.request_animation_frame(callback.as_ref().unchecked_ref())
                        {
                            frame_id.set(id);
                        }
                    }
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.cancel_animation_frame(frame_id.get());
                    }
                    handle.borrow_mut().take();
                }
            });
        }

        let on_hold = {
            let marquee = marquee.clone();
            Callback::from(move |_: MouseEvent| marquee.borrow_mut().set_held(true))
        };
        let on_release = {
            let marquee = marquee.clone();
            Callback::from(move |_: MouseEvent| marquee.borrow_mut().set_held(false))
        };
        let on_touch_hold = {
            let marquee = marquee.clone();
            Callback::from(move |_: TouchEvent| marquee.borrow_mut().set_held(true))
        };
        let on_touch_release = {
            let marquee = marquee.clone();
            Callback::from(move |_: TouchEvent| marquee.borrow_mut().set_held(false))
        };

        let cards = duplicate_for_loop(&props.projects);

        html! {
            <div ref={viewport} class="marquee-viewport" aria-label="Featured projects marquee">
                <div
                    ref={strip}
                    class="marquee-strip"
                    style="transform: translateX(0px)"
                    onmouseenter={on_hold}
                    onmouseleave={on_release}
                    ontouchstart={on_touch_hold}
                    ontouchend={on_touch_release}
                >
                    {
                        for cards
                            .iter()
                            .enumerate()
                            .map(|(index, project)| render_project_card(index, project))
                    }
                </div>
            </div>
        }
    }

    fn measure_half_width(strip: &NodeRef, marquee: &Rc<RefCell<MarqueeState>>) {
        if let Some(element) = strip.cast::<Element>() {
            marquee
                .borrow_mut()
                .set_half_width(f64::from(element.scroll_width()) / 2.0);
        }
    }

    fn render_project_card(index: usize, project: &Project) -> Html {
        html! {
            <a
                key={index}
                class="marquee-card"
                href={project.live_url.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                <div class="marquee-card-frame">
                    <img
                        src={project.image.clone()}
                        alt={project.title.clone()}
                        loading="lazy"
                    />
                    <div class="marquee-card-overlay">
                        <p>{ project.description.clone() }</p>
                        <div class="marquee-tag-row">
                            {
                                for project.technologies.iter().map(|tag| html! {
                                    <span key={tag.clone()} class="marquee-tag">{ tag.clone() }</span>
                                })
                            }
                        </div>
                    </div>
                </div>
                <h3 class="marquee-card-title">{ project.title.clone() }</h3>
            </a>
        }
    }

    /// Một mục hiển thị trên timeline dọc.
    #[derive(Clone, PartialEq)]
    struct TimelineEntry {
        heading: String,
        subheading: String,
        period: String,
        detail: String,
    }

    impl TimelineEntry {
        fn from_experience(entry: &Experience) -> Self {
            Self {
                heading: entry.role.clone(),
                subheading: entry.company.clone(),
                period: entry.period.clone(),
                detail: entry.description.clone(),
            }
        }

        fn from_education(entry: &Education) -> Self {
            Self {
                heading: entry.degree.clone(),
                subheading: entry.school.clone(),
                period: entry.period.clone(),
                detail: entry.description.clone(),
            }
        }
    }

    #[derive(Properties, PartialEq)]
    struct TimelineSectionProps {
        id: AttrValue,
        title: AttrValue,
        icon: AttrValue,
        entries: Vec<TimelineEntry>,
        config: PortfolioConfig,
        #[prop_or_default]
        alt: bool,
    }

    /// Section timeline dọc với icon di chuyển theo tiến độ cuộn. Mọi sự
    /// kiện scroll/resize/đổi kích thước đều dồn về một lần tính mỗi frame.
    #[function_component(TimelineSection)]
    fn timeline_section(props: &TimelineSectionProps) -> Html {
        let container = use_node_ref();
        let icon_top = use_state(|| 0.0f64);

        let dot_size = props.config.marker_dot_px;
        let icon_size = props.config.traveler_icon_px;

        {
            let container = container.clone();
            let icon_top = icon_top.clone();
            use_effect_with((), move |_| {
                let pending = Rc::new(Cell::new(false));
                let frame_id = Rc::new(Cell::new(0i32));

                let calc = {
                    let container = container.clone();
                    let icon_top = icon_top.clone();
                    let pending = pending.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        pending.set(false);
                        let Some(element) = container.cast::<HtmlElement>() else {
                            return;
                        };
                        let Some(window) = web_sys::window() else {
                            return;
                        };

                        let rect = element.get_bounding_client_rect();
                        let viewport_height = window
                            .inner_height()
                            .ok()
                            .and_then(|value| value.as_f64())
                            .unwrap_or(0.0);
                        let progress = section_progress(rect.top(), rect.height(), viewport_height);

                        let Ok(markers) = element.query_selector_all("[data-timeline-item]")
                        else {
                            return;
                        };
                        let mut marker_tops = Vec::with_capacity(markers.length() as usize);
                        for index in 0..markers.length() {
                            if let Some(marker) = markers
                                .item(index)
                                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                            {
                                marker_tops.push(f64::from(marker.offset_top()));
                            }
                        }

                        if let Some(track) =
                            TravelerTrack::from_markers(&marker_tops, dot_size, icon_size)
                        {
                            icon_top.set(track.icon_top(progress));
                        }
                    })
                };

                let calc_fn: js_sys::Function =
                    calc.as_ref().unchecked_ref::<js_sys::Function>().clone();

                let schedule = {
                    let pending = pending.clone();
                    let frame_id = frame_id.clone();
                    let calc_fn = calc_fn.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        if pending.get() {
                            return;
                        }
                        if let Some(window) = web_sys::window() {
                            if let Ok(id) = window.request_animation_frame(&calc_fn) {
                                frame_id.set(id);
                                pending.set(true);
                            }
                        }
                    })
                };

                // Tính ngay một lần lúc mount.
                let _ = calc_fn.call0(&JsValue::NULL);

                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        schedule.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        schedule.as_ref().unchecked_ref(),
                    );
                }

                let observer = ResizeObserver::new(schedule.as_ref().unchecked_ref()).ok();
                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), container.cast::<Element>())
                {
                    observer.observe(&element);
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            schedule.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            schedule.as_ref().unchecked_ref(),
                        );
                        let _ = window.cancel_animation_frame(frame_id.get());
                    }
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(schedule);
                    drop(calc);
                }
            });
        }

        html! {
            <section
                id={props.id.clone()}
                class={classes!("portfolio-section", props.alt.then_some("is-alt"))}
            >
                <div class="portfolio-section-inner">
                    <h2 class="portfolio-section-title">{ props.title.clone() }</h2>
                    <div ref={container} class="timeline-track">
                        <div class="timeline-traveler" style={format!("top: {}px", *icon_top)}>
                            <span>{ props.icon.clone() }</span>
                        </div>
                        {
                            for props
                                .entries
                                .iter()
                                .enumerate()
                                .map(|(index, entry)| render_timeline_entry(index, entry, props.alt))
                        }
                    </div>
                </div>
            </section>
        }
    }

    fn render_timeline_entry(index: usize, entry: &TimelineEntry, alt: bool) -> Html {
        html! {
            <div
                key={index}
                data-timeline-item=""
                class={classes!("timeline-entry", alt.then_some("is-alt"))}
            >
                <div class="timeline-dot"></div>
                <div class="timeline-card">
                    <h3 class="timeline-heading">{ entry.heading.clone() }</h3>
                    <p class="timeline-subheading">{ entry.subheading.clone() }</p>
                    <p class="timeline-period">{ entry.period.clone() }</p>
                    if !entry.detail.is_empty() {
                        <p class="timeline-detail">{ entry.detail.clone() }</p>
                    }
                </div>
            </div>
        }
    }

    fn render_contact(profile: &Profile) -> Html {
        html! {
            <section id="contact" class="portfolio-section">
                <div class="portfolio-section-inner">
                    <h2 class="portfolio-section-title">{"Get In Touch"}</h2>
                    <p class="contact-blurb">
                        {"I'm always open to discussing new opportunities, interesting projects, \
                          or just having a chat about technology and innovation."}
                    </p>
                    if !profile.email.is_empty() {
                        <div class="contact-actions">
                            <a class="contact-email" href={format!("mailto:{}", profile.email)}>
                                { profile.email.clone() }
                            </a>
                        </div>
                    }
                    <div class="contact-social-row">
                        { render_social_text_link(profile.socials.linkedin.clone(), "LinkedIn") }
                        { render_social_text_link(profile.socials.github.clone(), "GitHub") }
                        { render_social_text_link(profile.socials.stackoverflow.clone(), "StackOverflow") }
                        { render_social_text_link(profile.socials.quora.clone(), "Quora") }
                    </div>
                </div>
            </section>
        }
    }

    fn render_social_text_link(href: Option<String>, label: &'static str) -> Html {
        match href {
            Some(url) => html! {
                <a href={url} target="_blank" rel="noreferrer">{ label }</a>
            },
            None => html! {},
        }
    }

    #[derive(Properties, PartialEq)]
    struct ChatWidgetProps {
        knowledge: Rc<ChatKnowledge>,
        config: PortfolioConfig,
    }

    /// Hộp chat trả lời đóng hộp: bản ghi chỉ nằm trong bộ nhớ, phản hồi
    /// xuất hiện sau một độ trễ "suy nghĩ" ngẫu nhiên thuần trang trí.
    #[function_component(ChatWidget)]
    fn chat_widget(props: &ChatWidgetProps) -> Html {
        let open = use_state(|| false);
        let draft = use_state(String::new);
        let typing = use_state(|| false);
        let transcript = use_mut_ref(|| Transcript::with_greeting(greeting(), Utc::now()));
        let refresh = use_force_update();
        let log_end = use_node_ref();

        {
            let log_end = log_end.clone();
            let message_count = transcript.borrow().len();
            use_effect_with((message_count, *typing, *open), move |_| {
                if let Some(element) = log_end.cast::<Element>() {
                    element.scroll_into_view();
                }
                || ()
            });
        }

        let on_input = {
            let draft = draft.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                draft.set(input.value());
            })
        };

        let send = {
            let draft = draft.clone();
            let typing = typing.clone();
            let transcript = transcript.clone();
            let refresh = refresh.clone();
            let knowledge = props.knowledge.clone();
            let delay_min = props.config.reply_delay_min_ms;
            let delay_max = props.config.reply_delay_max_ms;
            Callback::from(move |_: ()| {
                let text = draft.trim().to_string();
                if text.is_empty() {
                    return;
                }

                transcript.borrow_mut().push(ChatMessage::new(
                    ChatRole::Visitor,
                    text.clone(),
                    Utc::now(),
                ));
                draft.set(String::new());
                typing.set(true);
                refresh.force_update();

                let reply = respond(&knowledge, &text);
                let delay = simulated_thinking_delay(delay_min, delay_max);

                let deliver = {
                    let transcript = transcript.clone();
                    let typing = typing.clone();
                    let refresh = refresh.clone();
                    Closure::once(move || {
                        transcript.borrow_mut().push(ChatMessage::new(
                            ChatRole::Assistant,
                            reply,
                            Utc::now(),
                        ));
                        typing.set(false);
                        refresh.force_update();
                    })
                };

                if let Some(window) = web_sys::window() {
                    if window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            deliver.as_ref().unchecked_ref(),
                            delay,
                        )
                        .is_ok()
                    {
                        // Timer một lần giữ closure sống tới khi chạy.
                        deliver.forget();
                    }
                }
            })
        };

        let on_keydown = {
            let send = send.clone();
            Callback::from(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    send.emit(());
                }
            })
        };
        let on_send_click = {
            let send = send.clone();
            Callback::from(move |_: MouseEvent| send.emit(()))
        };
        let on_toggle = {
            let open = open.clone();
            Callback::from(move |_: MouseEvent| open.set(!*open))
        };
        let on_close = {
            let open = open.clone();
            Callback::from(move |_: MouseEvent| open.set(false))
        };

        let messages = transcript.borrow().messages().to_vec();

        html! {
            <>
                <button class="chat-toggle" onclick={on_toggle} aria-label="Toggle assistant chat">
                    {"💬"}
                </button>
                if *open {
                    <div class="chat-window">
                        <div class="chat-header">
                            <h3>{"Portfolio Assistant"}</h3>
                            <button class="chat-close" onclick={on_close} aria-label="Close chat">
                                {"✕"}
                            </button>
                        </div>
                        <div class="chat-log">
                            { for messages.iter().map(render_chat_row) }
                            if *typing {
                                <p class="chat-typing">{"Assistant is typing…"}</p>
                            }
                            <div ref={log_end}></div>
                        </div>
                        <div class="chat-input-row">
                            <input
                                type="text"
                                value={(*draft).clone()}
                                oninput={on_input}
                                onkeydown={on_keydown}
                                placeholder="Ask me anything..."
                                aria-label="Chat message"
                            />
                            <button class="chat-send" onclick={on_send_click}>{"Send"}</button>
                        </div>
                    </div>
                }
            </>
        }
    }

    fn render_chat_row(message: &ChatMessage) -> Html {
        let role_class = match message.role {
            ChatRole::Visitor => "is-visitor",
            ChatRole::Assistant => "is-assistant",
        };
        html! {
            <div class={classes!("chat-row", role_class)}>
                <div class="chat-bubble">
                    <p>{ message.text.clone() }</p>
                </div>
            </div>
        }
    }

    /// Độ trễ giả lập trước khi phản hồi hiện ra, thuần trang trí.
    fn simulated_thinking_delay(min_ms: u32, max_ms: u32) -> i32 {
        let span = f64::from(max_ms.saturating_sub(min_ms));
        (f64::from(min_ms) + js_sys::Math::random() * span) as i32
    }

    /// Config bán phần nhận từ phía JS, trường nào thiếu thì giữ mặc định.
    #[derive(Deserialize)]
    struct JsPortfolioConfig {
        #[serde(default)]
        marquee_speed_px_per_sec: Option<f64>,
        #[serde(default)]
        marquee_view_threshold: Option<f64>,
        #[serde(default)]
        reveal_threshold: Option<f64>,
        #[serde(default)]
        reveal_reset_on_exit: Option<bool>,
        #[serde(default)]
        traveler_icon_px: Option<f64>,
        #[serde(default)]
        marker_dot_px: Option<f64>,
        #[serde(default)]
        reply_delay_min_ms: Option<u32>,
        #[serde(default)]
        reply_delay_max_ms: Option<u32>,
    }

    impl From<JsPortfolioConfig> for PortfolioConfig {
        fn from(cfg: JsPortfolioConfig) -> Self {
            let mut base = PortfolioConfig::default();
            if let Some(speed) = cfg.marquee_speed_px_per_sec {
                base.marquee_speed_px_per_sec = speed;
            }
            if let Some(threshold) = cfg.marquee_view_threshold {
                base.marquee_view_threshold = threshold;
            }
            if let Some(threshold) = cfg.reveal_threshold {
                base.reveal_threshold = threshold;
            }
            if let Some(reset) = cfg.reveal_reset_on_exit {
                base.reveal_reset_on_exit = reset;
            }
            if let Some(size) = cfg.traveler_icon_px {
                base.traveler_icon_px = size;
            }
            if let Some(size) = cfg.marker_dot_px {
                base.marker_dot_px = size;
            }
            if let Some(delay) = cfg.reply_delay_min_ms {
                base.reply_delay_min_ms = delay;
            }
            if let Some(delay) = cfg.reply_delay_max_ms {
                base.reply_delay_max_ms = delay;
            }
            base
        }
    }

    #[wasm_bindgen]
    pub fn mount_portfolio_app(
        selector: &str,
        profile: JsValue,
        config: Option<JsValue>,
    ) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let profile: Profile = from_value(profile)?;

        let config = match config {
            Some(js_config) => {
                let config: JsPortfolioConfig = from_value(js_config)
                    .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
                PortfolioConfig::from(config)
            }
            None => PortfolioConfig::default(),
        };

        yew::Renderer::<PortfolioApp>::with_root_and_props(
            target,
            PortfolioAppProps { profile, config },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_portfolio_app;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_portfolio_app(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "portfolio-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
