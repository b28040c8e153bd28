use crate::api::models::Track;

const SUSPENSE_LYRICS: &str = "[Chorus]
I don't wanna be in suspense
Wasn't ever making sense
Had to lower my defense
Oh, oh
This is not a lease extension
Ease up on the apprehension
Missing all the intervention
Oh, oh

[Verse 1]
Yeah, look
Bottles popping in the lobby (pop)
Tell me is this love or a hobby? (is it?)
Body language reading sloppy
You're an original, never a copy (nah)
Cashed out, lashed out, hit the road
Heavy heart, yeah, carrying a load
Zip code changing, switching up the mode
Story that was never told (yeah)

[Verse 2]
Wait a minute, get it how you live it
Ten toes down but the trust is pivoted
Limitless, yeah we pushing past the limit
Ticket to the ride, yeah we gotta win it (gotta win it)
Fade away, shot looking like a fade away
Praying for a better day, a getaway
Blue faces in the safe, let 'em stay
Nothing else left to say

[Chorus]
I don't wanna be in suspense
Wasn't ever making sense
Had to lower my defense
Oh, oh
This is not a lease extension
Ease up on the apprehension
Missing all the intervention
Oh, oh

[Outro]
Suspense (yeah)
Defense (no)
Oh, oh
Just making sense";

/// The single release this session plays.
pub fn featured_track() -> Track {
    Track {
        id: "1".to_string(),
        title: "Suspense".to_string(),
        artist: "Akadion".to_string(),
        url: "https://files.catbox.moe/ypggqy.wav".to_string(),
        cover: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1000&auto=format&fit=crop".to_string(),
        duration: "2:15".to_string(),
        lyrics: Some(SUSPENSE_LYRICS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_track_ships_with_lyrics() {
        let track = featured_track();
        assert_eq!(track.title, "Suspense");
        assert!(track.has_lyrics());
        assert!(track.lyrics.unwrap().starts_with("[Chorus]"));
    }
}
