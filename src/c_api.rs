// C ABI for hosts that embed the translator (editors, IMEs, scripting runtimes).
// Every entry point catches panics; strings returned to the caller must be
// released with `hindi_translator_free_string`.
use crate::config::TranslatorConfig;
use crate::Translator;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;
use std::sync::{PoisonError, RwLock};

static TRANSLATOR: RwLock<Option<Translator>> = RwLock::new(None);

unsafe fn read_str<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    // Interior NULs cannot cross the boundary.
    CString::new(s.replace('\0', ""))
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

fn with_translator<T>(f: impl FnOnce(&Translator) -> T) -> Option<T> {
    let guard = TRANSLATOR.read().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().map(f)
}

/// Initializes the translator. `config_path` may be null to use
/// `translator.json` in the working directory (or defaults).
///
/// # Safety
/// `config_path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn hindi_translator_init(config_path: *const c_char) -> bool {
    let config_path = match read_str(config_path) {
        "" => PathBuf::from(crate::config::CONFIG_FILE),
        path => PathBuf::from(path),
    };
    let result = catch_unwind(|| {
        let mut slot = TRANSLATOR.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            let config = TranslatorConfig::load_or_default(&config_path);
            *slot = Some(Translator::from_config(&config));
            tracing::info!("Hindi translator initialized through the C API.");
        }
    });
    if result.is_err() {
        tracing::error!("A panic occurred during translator initialization.");
    }
    result.is_ok()
}

/// Drops the translator. Unsaved session words are lost.
#[no_mangle]
pub extern "C" fn hindi_translator_destroy() {
    let _ = catch_unwind(|| {
        TRANSLATOR
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    });
}

/// Translates `text`. Returns null if the translator is not initialized.
///
/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn hindi_translator_translate(text: *const c_char) -> *mut c_char {
    let text = read_str(text);
    let result = catch_unwind(AssertUnwindSafe(|| with_translator(|t| t.translate(text))));
    match result {
        Ok(Some(translated)) => into_c_string(translated),
        Ok(None) => ptr::null_mut(),
        Err(_) => {
            tracing::error!("Panic in hindi_translator_translate.");
            ptr::null_mut()
        }
    }
}

/// Adds a session word. Both strings must be non-empty.
///
/// # Safety
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn hindi_translator_add_word(english: *const c_char, hindi: *const c_char) -> bool {
    let english = read_str(english).trim();
    let hindi = read_str(hindi).trim();
    if english.is_empty() || hindi.is_empty() {
        return false;
    }
    catch_unwind(AssertUnwindSafe(|| with_translator(|t| t.add_word(english, hindi)).is_some()))
        .unwrap_or(false)
}

/// Saves the dictionary file. Returns the status message; check the leading
/// word ("Dictionary" on success, "Error" otherwise).
#[no_mangle]
pub extern "C" fn hindi_translator_save() -> *mut c_char {
    let result = catch_unwind(|| {
        with_translator(|t| match t.save_dictionary() {
            Ok(report) => report.to_string(),
            Err(e) => format!("Error saving dictionary: {}", e),
        })
    });
    match result {
        Ok(Some(message)) => into_c_string(message),
        _ => ptr::null_mut(),
    }
}

/// JSON object with dictionary sizes, the load status and resource state.
#[no_mangle]
pub extern "C" fn hindi_translator_info() -> *mut c_char {
    let result = catch_unwind(|| {
        with_translator(|t| {
            serde_json::json!({
                "base_size": t.base_size(),
                "size": t.dictionary_size(),
                "status": t.status_message(),
                "resources_ready": t.resources_ready(),
                "warnings": t.provision_report().warnings,
            })
            .to_string()
        })
    });
    match result {
        Ok(Some(info)) => into_c_string(info),
        _ => ptr::null_mut(),
    }
}

/// # Safety
/// `s` must be null or a pointer returned by this library.
#[no_mangle]
pub unsafe extern "C" fn hindi_translator_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
