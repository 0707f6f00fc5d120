/// The fixed origin serving all real content. Immutable for the process
/// lifetime; the start page is derived from it by the gateway.
const STATIC_HOST: &str = "https://datlittladucky.github.io/Websites/";
const WINDOW_TITLE: &str = "Gatehouse";
