//! Parser für YMap-XML und die beiden Quell-Dialekte.
//!
//! Alle Parser laufen über denselben quick-xml-Event-Loop (`walk_elements`),
//! der Element-Anfang (mit Attributen) und Element-Ende (mit gesammeltem Text)
//! zusammen mit dem aktuellen Element-Pfad meldet.

mod map_editor;
mod spooner;
mod values;
mod ymap;

#[cfg(test)]
mod tests;

use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

pub use map_editor::parse_map_editor;
pub use spooner::parse_spooner;
pub use ymap::parse_ymap;

/// Element-Ereignis aus `walk_elements`.
pub(crate) enum ElementEvent<'a> {
    /// Element beginnt; `path` enthält das Element selbst als letzten Eintrag.
    Open {
        path: &'a [String],
        attributes: &'a [(String, String)],
    },
    /// Element endet; `text` ist der getrimmte Textinhalt nach dem letzten Kindelement.
    Close { path: &'a [String], text: &'a str },
}

/// Durchläuft ein XML-Dokument und meldet jedes Element an `visit`.
///
/// Prüft, dass das Wurzelelement `expected_root` heißt. Leere Elemente
/// (`<a/>`) erzeugen direkt hintereinander `Open` und `Close`.
pub(crate) fn walk_elements<F>(xml_content: &str, expected_root: &str, mut visit: F) -> Result<()>
where
    F: FnMut(ElementEvent<'_>) -> Result<()>,
{
    // Kein trim_text: Leerzeichen neben Entity-Referenzen (`a &amp; b`) bleiben
    // erhalten, getrimmt wird der gesammelte Text beim schließenden Tag.
    let mut reader = Reader::from_str(xml_content);

    let mut buffer = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let (tag, attributes) = decode_element(&reader, e)?;
                check_root(&path, &tag, expected_root, &mut saw_root)?;
                path.push(tag);
                text.clear();
                visit(ElementEvent::Open {
                    path: &path,
                    attributes: &attributes,
                })?;
            }
            Ok(Event::Empty(ref e)) => {
                let (tag, attributes) = decode_element(&reader, e)?;
                check_root(&path, &tag, expected_root, &mut saw_root)?;
                path.push(tag);
                visit(ElementEvent::Open {
                    path: &path,
                    attributes: &attributes,
                })?;
                visit(ElementEvent::Close {
                    path: &path,
                    text: "",
                })?;
                path.pop();
            }
            Ok(Event::Text(e)) => {
                text.push_str(&e.xml_content()?);
            }
            Ok(Event::CData(e)) => {
                text.push_str(&reader.decoder().decode(&e)?);
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(ch) = e.resolve_char_ref()? {
                    text.push(ch);
                } else {
                    let name = e.decode()?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .with_context(|| format!("Unbekannte XML-Entity: &{};", name))?;
                    text.push_str(resolved);
                }
            }
            Ok(Event::End(_)) => {
                visit(ElementEvent::Close {
                    path: &path,
                    text: text.trim(),
                })?;
                path.pop();
                text.clear();
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
            _ => {}
        }

        buffer.clear();
    }

    if !saw_root {
        bail!("Wurzelelement <{}> fehlt", expected_root);
    }
    if let Some(open) = path.last() {
        bail!("Unerwartetes Dateiende: <{}> nicht geschlossen", open);
    }

    Ok(())
}

fn decode_element(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<(String, Vec<(String, String)>)> {
    let name = e.name();
    let tag = reader.decoder().decode(name.as_ref())?.into_owned();

    let mut attributes = Vec::new();
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok((tag, attributes))
}

fn check_root(path: &[String], tag: &str, expected_root: &str, saw_root: &mut bool) -> Result<()> {
    if !path.is_empty() {
        return Ok(());
    }
    if *saw_root {
        bail!("Mehr als ein Wurzelelement");
    }
    if tag != expected_root {
        bail!(
            "Unerwartetes Wurzelelement <{}>, erwartet <{}>",
            tag,
            expected_root
        );
    }
    *saw_root = true;
    Ok(())
}

/// Vergleicht den Element-Pfad mit einer Folge von Tag-Namen.
pub(crate) fn path_is(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}
