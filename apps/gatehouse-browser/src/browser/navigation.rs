use super::*;

/// Opens a fresh tab already loading the start page.
pub(super) fn open_tab(gateway: &Gateway) -> BrowserTab {
    let mut tab = BrowserTab {
        view: View::new(),
        engine: LocalEngine::new(),
        authored_location: None,
    };
    load_target(&mut tab, gateway.start_page(), None);
    tab
}

/// Issues a shell-initiated load. When the load carries an authored virtual
/// address it is applied before the engine moves, so the true rewritten URL
/// never flashes in the address bar.
pub(super) fn load_target(tab: &mut BrowserTab, target: &str, virtual_address: Option<&str>) {
    match virtual_address {
        Some(virtual_address) => {
            tab.view.set_virtual_address(virtual_address);
            tab.authored_location = Some(target.to_owned());
        }
        None => tab.authored_location = None,
    }

    tab.engine.set_location(target);
    tab.view.push_history(target);
}

/// Address-bar submission: start tokens load the start page, valid addresses
/// load their rewritten target, everything else shows the invalid-address
/// document without touching navigation state.
pub(super) fn submit_address(gateway: &Gateway, tab: &mut BrowserTab, input: &str) {
    match gateway.resolve_submission(input) {
        Submission::StartPage => load_target(tab, gateway.start_page(), None),
        Submission::Load {
            target,
            virtual_address,
            domain,
        } => {
            tab.view.set_title(domain);
            load_target(tab, &target, Some(&virtual_address));
        }
        Submission::Invalid => {
            log::warn!("address input failed validation: `{input}`");
            tab.engine
                .show_document(&ErrorPage::InvalidAddress.document());
        }
    }
}

pub(super) fn navigate_back(tab: &mut BrowserTab) {
    let Some(url) = tab.view.go_back().map(str::to_owned) else {
        return;
    };
    tab.authored_location = None;
    tab.engine.set_location(&url);
}

pub(super) fn navigate_forward(tab: &mut BrowserTab) {
    let Some(url) = tab.view.go_forward().map(str::to_owned) else {
        return;
    };
    tab.authored_location = None;
    tab.engine.set_location(&url);
}

pub(super) fn reload(tab: &mut BrowserTab) {
    let Some(url) = tab.view.current_entry().map(str::to_owned) else {
        return;
    };
    tab.authored_location = None;
    tab.engine.set_location(&url);
}

/// Drains engine events until the queue settles. Handling one event may queue
/// more (a finished load issues the title probe), so the drain loops.
pub(super) fn pump_engine(gateway: &Gateway, tab: &mut BrowserTab) {
    loop {
        let events = tab.engine.poll_events();
        if events.is_empty() {
            break;
        }

        for event in events {
            handle_event(gateway, tab, event);
        }
    }
}

fn handle_event(gateway: &Gateway, tab: &mut BrowserTab, event: EngineEvent) {
    match event {
        EngineEvent::NavigationRequested { url } => apply_decision(gateway, tab, &url),
        EngineEvent::LocationChanged { url } => {
            if tab.authored_location.as_deref() == Some(url.as_str()) {
                // The shell authored this load and already wrote the virtual
                // address; re-deriving it would turn `example.com` into
                // `example.com/index`.
                tab.authored_location = None;
            } else {
                tab.view.sync_virtual_address(gateway, &url);
            }
        }
        EngineEvent::LoadFinished { success } => match assess_load(success) {
            LoadCheck::ShowError(page) => {
                log::error!("load failed for {}", tab.engine.location());
                tab.engine.show_document(&page.document());
            }
            LoadCheck::ProbeTitle => tab.engine.request_title(),
        },
        EngineEvent::TitleChanged { title } => tab.view.set_title(title),
        EngineEvent::TitleResult { title } => {
            if let Some(page) = assess_title(&title) {
                log::info!("not-found title detected at {}", tab.engine.location());
                tab.engine.show_document(&page.document());
            }
        }
    }
}

/// Applies the interception policy to an engine-initiated navigation
/// request. Redirects update the virtual address synchronously with the
/// cancellation; blocks drop the request with no user-visible feedback.
fn apply_decision(gateway: &Gateway, tab: &mut BrowserTab, url: &str) {
    match gateway.decide(url) {
        NavigationDecision::Allow => load_target(tab, url, None),
        NavigationDecision::Redirect {
            target,
            virtual_address,
        } => {
            log::debug!("rewrote {url} -> {target}");
            load_target(tab, &target, Some(&virtual_address));
        }
        NavigationDecision::Block => log::info!("blocked navigation to {url}"),
    }
}

#[cfg(test)]
include!("tests.rs");
