/// One tab: a view plus the engine surface it owns.
///
/// `authored_location` remembers a load the shell issued together with an
/// explicit virtual address; the location-change sync must not clobber that
/// address when the engine reports the same location back.
struct BrowserTab {
    view: View,
    engine: LocalEngine,
    authored_location: Option<String>,
}

struct ShellApp {
    gateway: Gateway,
    tabs: Vec<BrowserTab>,
    active: usize,
    address_input: String,
}
