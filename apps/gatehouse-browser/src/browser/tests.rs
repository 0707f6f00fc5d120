#[cfg(test)]
mod tests {
    use super::{
        BrowserTab, Gateway, ShellApp, navigate_back, open_tab, pump_engine, submit_address,
    };
    use gate_engine::RenderEngine;

    const HOST: &str = "https://datlittladucky.github.io/Websites/";

    fn gateway() -> Gateway {
        match Gateway::new(HOST) {
            Ok(gateway) => gateway,
            Err(error) => panic!("{error}"),
        }
    }

    fn settled_tab(gateway: &Gateway) -> BrowserTab {
        let mut tab = open_tab(gateway);
        pump_engine(gateway, &mut tab);
        tab
    }

    #[test]
    fn bare_domain_submission_loads_the_index_page() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);

        submit_address(&gateway, &mut tab, "example.com");
        pump_engine(&gateway, &mut tab);

        assert_eq!(
            tab.engine.location(),
            "https://datlittladucky.github.io/Websites/example.com/index.html"
        );
        assert_eq!(tab.view.virtual_address(), "example.com");
    }

    #[test]
    fn subpath_submission_loads_the_html_page() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);

        submit_address(&gateway, &mut tab, "example.com/foo/bar");
        pump_engine(&gateway, &mut tab);

        assert_eq!(
            tab.engine.location(),
            "https://datlittladucky.github.io/Websites/example.com/foo/bar.html"
        );
        assert_eq!(tab.view.virtual_address(), "example.com/foo/bar");
    }

    #[test]
    fn invalid_submission_shows_error_document_without_navigating() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);
        let location_before = tab.engine.location().to_owned();
        let virtual_before = tab.view.virtual_address().to_owned();

        submit_address(&gateway, &mut tab, "not a domain");
        pump_engine(&gateway, &mut tab);

        assert_eq!(tab.engine.location(), location_before);
        assert_eq!(tab.view.virtual_address(), virtual_before);
        let document = tab.engine.document().unwrap_or_default();
        assert!(document.contains("Invalid domain format"));
    }

    #[test]
    fn fresh_tabs_load_the_start_page() {
        let gateway = gateway();
        let tab = settled_tab(&gateway);

        assert_eq!(tab.engine.location(), gateway.start_page());
        // The start page sits under the host, so the stripping rule applies.
        assert_eq!(tab.view.virtual_address(), "start/index");
    }

    #[test]
    fn start_token_returns_to_the_start_page() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);
        submit_address(&gateway, &mut tab, "example.com");
        pump_engine(&gateway, &mut tab);

        submit_address(&gateway, &mut tab, "start");
        pump_engine(&gateway, &mut tab);

        assert_eq!(tab.engine.location(), gateway.start_page());
        assert_eq!(tab.view.virtual_address(), "start/index");
    }

    #[test]
    fn blocked_link_leaves_the_view_untouched() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);
        let location_before = tab.engine.location().to_owned();

        tab.engine.request_navigation("https://malicious.test/");
        pump_engine(&gateway, &mut tab);

        assert_eq!(tab.engine.location(), location_before);
        assert!(tab.engine.document().is_none());
    }

    #[test]
    fn external_looking_link_is_rewritten_onto_the_host() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);

        tab.engine.request_navigation("https://example.com/");
        pump_engine(&gateway, &mut tab);

        assert_eq!(
            tab.engine.location(),
            "https://datlittladucky.github.io/Websites/example.com/index.html"
        );
        assert_eq!(tab.view.virtual_address(), "example.com");
    }

    #[test]
    fn internal_link_passes_through_without_rewriting() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);
        let internal = "https://datlittladucky.github.io/Websites/example.com/index.html";

        tab.engine.request_navigation(internal);
        pump_engine(&gateway, &mut tab);

        assert_eq!(tab.engine.location(), internal);
        assert_eq!(tab.view.virtual_address(), "example.com/index");
    }

    #[test]
    fn not_found_title_replaces_content_with_error_document() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);
        submit_address(&gateway, &mut tab, "example.com");
        pump_engine(&gateway, &mut tab);

        tab.engine
            .show_document("<html><head><title>404 Not Found</title></head><body></body></html>");
        pump_engine(&gateway, &mut tab);

        let document = tab.engine.document().unwrap_or_default();
        assert!(document.contains("Page not found"));
    }

    #[test]
    fn failed_load_shows_the_failure_document() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);

        tab.engine.fail_next_load();
        submit_address(&gateway, &mut tab, "example.com");
        pump_engine(&gateway, &mut tab);

        let document = tab.engine.document().unwrap_or_default();
        assert!(document.contains("Page failed to load"));
    }

    #[test]
    fn title_changes_feed_the_tab_label() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);

        tab.engine
            .show_document("<html><head><title>My Site</title></head><body>hi</body></html>");
        pump_engine(&gateway, &mut tab);

        assert_eq!(tab.view.tab_label(), "My Site");
    }

    #[test]
    fn history_steps_back_through_submissions() {
        let gateway = gateway();
        let mut tab = settled_tab(&gateway);
        submit_address(&gateway, &mut tab, "example.com");
        pump_engine(&gateway, &mut tab);

        navigate_back(&mut tab);
        pump_engine(&gateway, &mut tab);

        assert_eq!(tab.engine.location(), gateway.start_page());
        assert_eq!(tab.view.virtual_address(), "start/index");
    }

    #[test]
    fn the_last_tab_cannot_be_closed() {
        let mut app = ShellApp::new(gateway());
        app.close_tab(0);
        assert_eq!(app.tabs.len(), 1);

        app.add_tab();
        assert_eq!(app.tabs.len(), 2);
        app.close_tab(1);
        assert_eq!(app.tabs.len(), 1);
    }

    #[test]
    fn switching_tabs_refreshes_the_address_bar() {
        let mut app = ShellApp::new(gateway());
        app.address_input = "example.com".to_owned();
        app.submit();

        app.add_tab();
        assert_eq!(app.address_input, "start/index");

        app.select_tab(0);
        assert_eq!(app.address_input, "example.com");
    }
}
