use crate::game::common::{Colour, Move};
use crate::hex::hex_board::Board;
use crate::hex::HexPlayer;
use std::io::{self, BufRead, Write};

/*
 * Line protocol spoken with the Hex tournament host over standard input and
 * output. Each message is one '\n' terminated line of semicolon separated
 * fields, the first field being the message tag.
 *
 * Input messages (from host to agent):
 *      START;;[board];[turn];
 *          the game has started. The agent answers with a move only if it
 *          plays the first-player colour, otherwise it waits.
 *      CHANGE;[r],[c];[board];[turn];
 *          the opponent placed a stone at (r, c) and it is the agent's turn,
 *          the agent always answers with a move.
 *      SWAP;;[board];[turn];
 *          the opponent invoked the swap rule: the agent now plays the
 *          opposite colour, and answers with a move exactly as for CHANGE.
 *      anything else
 *          the game is over, the agent exits without answering.
 *
 *      [board] - the current position, [size] comma separated rows of [size]
 *          single-character cell markers, '0' for an empty cell.
 *
 * Output messages (from agent to host):
 *      [r],[c]
 *          place a stone on the empty cell at zero-based (row, column).
 *      -1,-1
 *          invoke the swap rule instead of placing a stone.
 */

/// The one piece of state that outlives a single message.
pub struct AgentState {
    /// Flips exactly once over the life of the process, when a SWAP arrives.
    pub colour: Colour,
    /// Number of messages received so far, the current one included.
    pub turn: u32,
    pub board_size: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tag {
    Start,
    Change,
    Swap,
}

impl Tag {
    fn parse(s: &str) -> Option<Tag> {
        match s {
            "START" => Some(Tag::Start),
            "CHANGE" => Some(Tag::Change),
            "SWAP" => Some(Tag::Swap),
            _ => None,
        }
    }
}

pub struct AgentEngine {
    state: AgentState,
    player: Box<dyn HexPlayer>,
}

impl AgentEngine {
    pub fn new(colour: Colour, board_size: usize, player: Box<dyn HexPlayer>) -> Self {
        Self {
            state: AgentState {
                colour,
                turn: 0,
                board_size,
            },
            player,
        }
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Drives the read-interpret-respond cycle until the host closes our
    /// input, sends an unrecognized tag, or a read fails.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                // host closed our stdin, nothing more to do
                return Ok(());
            }
            if !self.interpret_message(&line, &mut output)? {
                return Ok(());
            }
        }
    }

    /// Handles one message, writing at most one response line. Returns
    /// `false` when the loop should stop.
    fn interpret_message(&mut self, line: &str, output: &mut impl Write) -> io::Result<bool> {
        self.state.turn += 1;

        let line = line.trim();
        log::debug!("host: {}", line);

        let fields: Vec<&str> = line.split(';').collect();
        let tag = match fields.first().copied().and_then(Tag::parse) {
            Some(tag) => tag,
            // any unrecognized tag is the host telling us the game is over
            None => return Ok(false),
        };
        let board_field = fields.get(2).copied().unwrap_or("");

        match tag {
            Tag::Start => {
                if self.state.colour == Colour::first_player() {
                    self.respond(board_field, output)
                } else {
                    // the opponent opens; our first request arrives as CHANGE
                    Ok(true)
                }
            }
            Tag::Swap | Tag::Change => {
                if tag == Tag::Swap {
                    // the opponent took our opening move, we play on with
                    // the other colour and answer like any CHANGE
                    self.state.colour = self.state.colour.opposite();
                }
                self.respond(board_field, output)
            }
        }
    }

    /// Asks the player for a move and writes it out. The swap claim is
    /// decided before the board field is parsed; a full board produces no
    /// response at all.
    fn respond(&mut self, board_field: &str, output: &mut impl Write) -> io::Result<bool> {
        if self.player.claim_swap(self.state.turn) {
            writeln!(output, "{}", Move::Swap)?;
            output.flush()?;
            return Ok(true);
        }

        let board = match Board::parse(board_field, self.state.board_size) {
            Some(board) => board,
            None => {
                log::error!("unreadable board in message, giving up");
                return Ok(false);
            }
        };
        log::debug!("current position:\n{}", board);

        if let Some(m) = self.player.next_move(&board) {
            writeln!(output, "{}", m)?;
            output.flush()?;
        }
        Ok(true)
    }
}
