use crate::domain::model::{Inbound, Outbound, ReplyMarkup, SessionId};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Line-based chat transport: every input line is one message from a single
/// fixed session, replies are written back as plain text.
pub struct ConsoleTransport<R, W> {
    reader: R,
    line: Vec<u8>,
    writer: W,
    session_id: SessionId,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> ConsoleTransport<R, W> {
    pub fn new(reader: R, writer: W, session_id: impl Into<SessionId>) -> Self {
        Self {
            reader,
            line: Vec::new(),
            writer,
            session_id: session_id.into(),
        }
    }
}

impl ConsoleTransport<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    pub fn stdio(session_id: impl Into<SessionId>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), session_id)
    }
}

/// Plain-text rendering of a reply: the text, then one `[option]` line per
/// keyboard row.
pub fn render(message: &Outbound) -> String {
    let mut out = message.text.clone();
    out.push('\n');
    if let ReplyMarkup::Keyboard(keyboard) = &message.markup {
        for row in &keyboard.rows {
            let line = row
                .iter()
                .map(|option| format!("[{}]", option))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

impl<R, W> Transport for ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn next_inbound(&mut self) -> Result<Option<Inbound>> {
        loop {
            self.line.clear();
            // 0 bytes read means EOF
            if self.reader.read_until(b'\n', &mut self.line).await? == 0 {
                return Ok(None);
            }

            // 非 UTF-8 輸入不能結束對話，以替代字元解碼後照常處理
            let decoded = String::from_utf8_lossy(&self.line);
            if matches!(decoded, std::borrow::Cow::Owned(_)) {
                tracing::warn!(session = %self.session_id, "Input line was not valid UTF-8");
            }

            let text = decoded.trim();
            if text.is_empty() {
                continue;
            }
            return Ok(Some(Inbound {
                session_id: self.session_id.clone(),
                text: text.to_string(),
            }));
        }
    }

    async fn send(&mut self, _session_id: &SessionId, message: &Outbound) -> Result<()> {
        self.writer.write_all(render(message).as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Keyboard;

    #[tokio::test]
    async fn test_reads_non_empty_lines() {
        let input: &[u8] = b"/start\n\n   \n\xE2\x99\x88 \xD0\x9E\xD0\xB2\xD0\xB5\xD0\xBD  \n";
        let mut transport = ConsoleTransport::new(input, Vec::new(), "console");

        let first = transport.next_inbound().await.unwrap().unwrap();
        assert_eq!(first.session_id, "console");
        assert_eq!(first.text, "/start");

        let second = transport.next_inbound().await.unwrap().unwrap();
        assert_eq!(second.text, "♈ Овен");

        assert!(transport.next_inbound().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_close_transport() {
        let input: &[u8] = b"/start\n\xff\xfe\n/cancel\n";
        let mut transport = ConsoleTransport::new(input, Vec::new(), "console");

        assert_eq!(transport.next_inbound().await.unwrap().unwrap().text, "/start");

        let garbled = transport.next_inbound().await.unwrap().unwrap();
        assert_eq!(garbled.text, "\u{FFFD}\u{FFFD}");

        assert_eq!(transport.next_inbound().await.unwrap().unwrap().text, "/cancel");
        assert!(transport.next_inbound().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut transport = ConsoleTransport::new(&b"/start"[..], Vec::new(), "console");
        assert_eq!(transport.next_inbound().await.unwrap().unwrap().text, "/start");
        assert!(transport.next_inbound().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_send_renders_keyboard() {
        let mut transport = ConsoleTransport::new(&b""[..], Vec::new(), "console");
        let message = Outbound {
            text: "Что вас интересует?".to_string(),
            markup: ReplyMarkup::Keyboard(Keyboard {
                rows: vec![
                    vec!["a".to_string(), "b".to_string()],
                    vec!["c".to_string()],
                ],
                one_time: false,
                resize: true,
            }),
        };

        transport.send(&"console".to_string(), &message).await.unwrap();

        let written = String::from_utf8(transport.writer.clone()).unwrap();
        assert_eq!(written, "Что вас интересует?\n[a] [b]\n[c]\n");
    }

    #[test]
    fn test_render_plain_text() {
        assert_eq!(render(&Outbound::text("👋 До свидания!")), "👋 До свидания!\n");
    }
}
